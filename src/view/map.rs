//! Choropleth map figure
//!
//! Builds a Plotly figure document (data + layout) for the world map. The
//! browser renders it; this module only decides what goes in it.

use serde::Serialize;
use serde_json::{json, Value};

use crate::data::Dataset;

/// Projection scale applied when a country is focused
pub const FOCUS_SCALE: f64 = 3.0;

/// Projection scale of the world view
pub const WORLD_SCALE: f64 = 1.0;

const COLOR_SCALE: &str = "Purples";
const COLORBAR_TITLE: &str = "World Cup Wins";

/// Where the map is centred and how far it is zoomed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum MapFocus {
    /// Whole world, default zoom
    World,
    /// Centred on one country
    Country {
        country: String,
        lat: f64,
        lon: f64,
        scale: f64,
    },
}

impl MapFocus {
    pub fn scale(&self) -> f64 {
        match self {
            MapFocus::World => WORLD_SCALE,
            MapFocus::Country { scale, .. } => *scale,
        }
    }
}

/// Map focus for the selected country; unknown countries keep the world view
pub fn map_focus(dataset: &Dataset, country: Option<&str>) -> MapFocus {
    let Some(country) = country else {
        return MapFocus::World;
    };

    match dataset.find_standing(country) {
        Some(s) => MapFocus::Country {
            country: s.country.clone(),
            lat: s.lat,
            lon: s.lon,
            scale: FOCUS_SCALE,
        },
        None => MapFocus::World,
    }
}

/// Full figure document for the given focus
pub fn map_figure(dataset: &Dataset, focus: &MapFocus) -> Value {
    let standings = dataset.standings();

    let iso: Vec<&str> = standings.iter().map(|s| s.iso_code.as_str()).collect();
    let countries: Vec<&str> = standings.iter().map(|s| s.country.as_str()).collect();
    let wins: Vec<u32> = standings.iter().map(|s| s.wins).collect();
    let hover: Vec<String> = standings.iter().map(|s| s.hover_text()).collect();
    let custom: Vec<Value> = standings
        .iter()
        .map(|s| json!([s.country, s.wins]))
        .collect();

    let choropleth = json!({
        "type": "choropleth",
        "locations": iso,
        "z": wins,
        "hovertext": countries,
        "customdata": custom,
        "coloraxis": "coloraxis",
        "hovertemplate": "<b>%{hovertext}</b><br>World Cup Wins=%{z}<extra></extra>",
        "name": ""
    });

    // Transparent markers widen the hover target over small countries
    let hover_markers = json!({
        "type": "scattergeo",
        "locations": iso,
        "hovertext": hover,
        "mode": "markers",
        "marker": { "size": 35, "color": "rgba(0,0,0,0)", "line": { "width": 0 } },
        "hoverinfo": "text",
        "showlegend": false
    });

    let labels = json!({
        "type": "scattergeo",
        "locations": iso,
        "text": countries,
        "mode": "text",
        "textfont": { "size": 11, "color": "black", "family": "Arial", "weight": "bold" },
        "hoverinfo": "none",
        "showlegend": false
    });

    let mut geo = json!({
        "visible": true,
        "showframe": false,
        "showcoastlines": false,
        "showcountries": true,
        "countrycolor": "rgb(150, 150, 165)",
        "subunitcolor": "rgb(200, 200, 200)",
        "landcolor": "rgb(240, 240, 242)",
        "bgcolor": "rgba(255,255,255,0.1)",
        "projection": { "type": "equirectangular", "scale": focus.scale() }
    });

    if let MapFocus::Country { lat, lon, .. } = focus {
        geo["center"] = json!({ "lat": lat, "lon": lon });
    }

    json!({
        "data": [choropleth, hover_markers, labels],
        "layout": {
            "geo": geo,
            "coloraxis": {
                "colorscale": COLOR_SCALE,
                "cmin": 0,
                "cmax": dataset.max_wins(),
                "colorbar": {
                    "title": { "text": COLORBAR_TITLE, "side": "top" },
                    "x": 1.0,
                    "y": 0.5,
                    "len": 0.9,
                    "thickness": 28
                }
            },
            "margin": { "r": 100, "t": 20, "l": 0, "b": 0 },
            "paper_bgcolor": "rgba(0,0,0,0)",
            "plot_bgcolor": "rgba(0,0,0,0)"
        }
    })
}
