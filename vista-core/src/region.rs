//! Region records and the lookups a choropleth map renders from.
//!
//! Every shape on the map asks three questions of the same record list:
//! which fill to use, which fill to use on hover, and what the tooltip says.
//! All three go through [`lookup`], a linear scan where the first record with
//! an equal name wins.

use crate::color::hover_shade;
use crate::theme::MapColors;
use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Value shown in a region's tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegionValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for RegionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionValue::Number(n) => write!(f, "{}", n),
            RegionValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for RegionValue {
    fn from(n: f64) -> Self {
        RegionValue::Number(n)
    }
}

impl From<i64> for RegionValue {
    fn from(n: i64) -> Self {
        RegionValue::Number(n as f64)
    }
}

impl From<&str> for RegionValue {
    fn from(s: &str) -> Self {
        RegionValue::Text(s.to_string())
    }
}

/// Display data for one map region, keyed by the region's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<RegionValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl RegionRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            color: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<RegionValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Outcome of looking a region name up in a record list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegionLookup<'a> {
    Found(&'a RegionRecord),
    NotFound,
}

impl<'a> RegionLookup<'a> {
    pub fn record(self) -> Option<&'a RegionRecord> {
        match self {
            RegionLookup::Found(record) => Some(record),
            RegionLookup::NotFound => None,
        }
    }
}

/// Find the first record whose name equals `name`.
///
/// The scan only runs when there is something to scan: with no records and
/// no name the result is `NotFound` straight away.
pub fn lookup<'a>(name: Option<&str>, records: &'a [RegionRecord]) -> RegionLookup<'a> {
    if records.is_empty() && name.map_or(true, str::is_empty) {
        return RegionLookup::NotFound;
    }
    name.and_then(|name| records.iter().find(|record| record.name == name))
        .map_or(RegionLookup::NotFound, RegionLookup::Found)
}

/// Fill for a region: the matched record's color, else `default_fill`.
pub fn highlighted_region(name: Option<&str>, records: &[RegionRecord], default_fill: &str) -> String {
    lookup(name, records)
        .record()
        .and_then(|record| record.color.clone())
        .unwrap_or_else(|| default_fill.to_string())
}

/// Hover fill for a region: its fill darkened by `HOVER_PERCENTAGE`.
pub fn region_hover_color(name: Option<&str>, records: &[RegionRecord], default_fill: &str) -> String {
    hover_shade(&highlighted_region(name, records, default_fill))
}

/// Tooltip label `"{name} - {prefix}{value}{suffix}"`, empty when nothing matches.
pub fn region_value(name: Option<&str>, records: &[RegionRecord], prefix: &str, suffix: &str) -> String {
    match lookup(name, records) {
        RegionLookup::Found(record) => {
            let value = record
                .value
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default();
            format!("{} - {}{}{}", record.name, prefix, value, suffix)
        }
        RegionLookup::NotFound => String::new(),
    }
}

/// Fill pair for one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionPaint {
    pub fill: String,
    pub hover_fill: String,
}

/// Everything the map renderer needs to paint shapes without calling back
/// into Rust per shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionShading {
    /// Paint for named regions; shapes not listed use the defaults.
    pub regions: BTreeMap<String, RegionPaint>,
    pub default_fill: String,
    pub default_hover_fill: String,
    pub stroke: String,
    pub stroke_width: u32,
}

pub const REGION_STROKE_WIDTH: u32 = 2;

impl RegionShading {
    pub fn new(records: &[RegionRecord], colors: &MapColors) -> Self {
        let mut regions = BTreeMap::new();
        for record in records {
            // First match wins, same as lookup()
            if regions.contains_key(&record.name) {
                continue;
            }
            let name = Some(record.name.as_str());
            regions.insert(
                record.name.clone(),
                RegionPaint {
                    fill: highlighted_region(name, records, &colors.default_fill),
                    hover_fill: region_hover_color(name, records, &colors.default_fill),
                },
            );
        }
        Self {
            regions,
            default_fill: colors.default_fill.clone(),
            default_hover_fill: hover_shade(&colors.default_fill),
            stroke: colors.stroke.clone(),
            stroke_width: REGION_STROKE_WIDTH,
        }
    }
}

/// Parse `name,value,color` rows into region records.
///
/// A leading `name,...` header row is skipped. Empty values and colors become
/// `None`; values that parse as finite numbers become [`RegionValue::Number`],
/// anything else (including `Infinity` and `NaN`) stays text.
pub fn parse_region_csv(csv_data: &str) -> anyhow::Result<Vec<RegionRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(csv_data.as_bytes());

    let mut records = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let record = result?;
        let name = record.get(0).unwrap_or("");
        if row == 0 && name.eq_ignore_ascii_case("name") {
            continue;
        }
        if name.is_empty() {
            log::warn!("Skipping region row {} without a name", row + 1);
            continue;
        }

        let value = match record.get(1).unwrap_or("") {
            "" => None,
            raw => Some(match raw.parse::<f64>() {
                Ok(n) if n.is_finite() => RegionValue::Number(n),
                _ => RegionValue::Text(raw.to_string()),
            }),
        };
        let color = record
            .get(2)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        records.push(RegionRecord {
            name: name.to_string(),
            value,
            color,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ThemeMode, ThemeTokens};

    fn us_only() -> Vec<RegionRecord> {
        vec![RegionRecord::new("US").with_value(42_i64).with_color("#111")]
    }

    #[test]
    fn test_lookup_match() {
        let records = us_only();
        assert_eq!(highlighted_region(Some("US"), &records, "#000"), "#111");
        assert_eq!(region_value(Some("US"), &records, "", ""), "US - 42");
    }

    #[test]
    fn test_lookup_miss_falls_back() {
        let records = us_only();
        assert_eq!(lookup(Some("FR"), &records), RegionLookup::NotFound);
        assert_eq!(highlighted_region(Some("FR"), &records, "#000"), "#000");
        assert_eq!(region_value(Some("FR"), &records, "", ""), "");
    }

    #[test]
    fn test_lookup_without_name_or_records() {
        assert_eq!(lookup(None, &[]), RegionLookup::NotFound);
        assert_eq!(lookup(Some(""), &[]), RegionLookup::NotFound);
        assert_eq!(lookup(Some("US"), &[]), RegionLookup::NotFound);
        assert_eq!(lookup(None, &us_only()), RegionLookup::NotFound);
        assert_eq!(highlighted_region(None, &[], "#abcdef"), "#abcdef");
    }

    #[test]
    fn test_first_match_wins() {
        let records = vec![
            RegionRecord::new("Peru").with_value(1_i64).with_color("#6366f1"),
            RegionRecord::new("Peru").with_value(2_i64).with_color("#ef4444"),
        ];
        assert_eq!(highlighted_region(Some("Peru"), &records, "#000"), "#6366f1");
        assert_eq!(region_value(Some("Peru"), &records, "", ""), "Peru - 1");
    }

    #[test]
    fn test_label_prefix_and_suffix() {
        let records = vec![
            RegionRecord::new("Japan").with_value(12.5),
            RegionRecord::new("Chile").with_value("n/a"),
            RegionRecord::new("Kenya"),
        ];
        assert_eq!(region_value(Some("Japan"), &records, "$", "M"), "Japan - $12.5M");
        assert_eq!(region_value(Some("Chile"), &records, "", "%"), "Chile - n/a%");
        assert_eq!(region_value(Some("Kenya"), &records, "", ""), "Kenya - ");
    }

    #[test]
    fn test_hover_color() {
        let records = us_only();
        assert_eq!(region_hover_color(Some("US"), &records, "#ffffff"), "#0f0f0f");
        assert_eq!(region_hover_color(Some("FR"), &records, "#ffffff"), "#e5e5e5");
        // Record without color falls back to the default fill
        let uncolored = vec![RegionRecord::new("US").with_value(1_i64)];
        assert_eq!(region_hover_color(Some("US"), &uncolored, "#ffffff"), "#e5e5e5");
    }

    #[test]
    fn test_shading_table() {
        let tokens = ThemeTokens::default();
        let colors = MapColors::for_mode(ThemeMode::Light, &tokens);
        let records = vec![
            RegionRecord::new("US").with_color("#111111"),
            RegionRecord::new("US").with_color("#ef4444"),
            RegionRecord::new("Peru"),
        ];
        let shading = RegionShading::new(&records, &colors);

        assert_eq!(shading.regions.len(), 2);
        assert_eq!(shading.regions["US"].fill, "#111111");
        assert_eq!(shading.regions["US"].hover_fill, "#0f0f0f");
        assert_eq!(shading.regions["Peru"].fill, tokens.gray100);
        assert!(!shading.regions.contains_key("Atlantis"));
        assert_eq!(shading.default_fill, tokens.gray100);
        assert_eq!(shading.default_hover_fill, hover_shade(&tokens.gray100));
        assert_eq!(shading.stroke, tokens.gray300);
        assert_eq!(shading.stroke_width, 2);
    }

    #[test]
    fn test_parse_region_csv() {
        let csv = "name,value,color\nUnited States of America,42,#6366f1\nFrance,,\nBrazil,high,#10b981\n,7,#000\n";
        let records = parse_region_csv(csv).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].value, Some(RegionValue::Number(42.0)));
        assert_eq!(records[0].color.as_deref(), Some("#6366f1"));
        assert_eq!(records[1], RegionRecord::new("France"));
        assert_eq!(records[2].value, Some(RegionValue::Text("high".to_string())));

        let odd = parse_region_csv("Atlantis,Infinity,\nLemuria,NaN,\nMu,inf,\n").unwrap();
        let labels: Vec<String> = odd
            .iter()
            .map(|record| region_value(Some(record.name.as_str()), &odd, "", ""))
            .collect();
        assert_eq!(labels, ["Atlantis - Infinity", "Lemuria - NaN", "Mu - inf"]);
    }

    #[test]
    fn test_region_record_json() {
        let records: Vec<RegionRecord> =
            serde_json::from_str(r##"[{"name":"US","value":42,"color":"#111"},{"name":"FR","value":"low"}]"##)
                .unwrap();
        assert_eq!(records[0], us_only()[0]);
        assert_eq!(records[1].value, Some(RegionValue::Text("low".to_string())));
        assert_eq!(records[1].color, None);
    }
}
