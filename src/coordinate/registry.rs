//! Embedded coordinate system registry
//!
//! Static definitions (identifiers, labels, transform descriptors, bounds
//! and tile-grid origins) for the supported reference systems, parsed once
//! from the embedded `coordinate_systems.toml` file and shared read-only
//! for the process lifetime.

use lazy_static::lazy_static;

use super::bounds::Bounds;
use super::point::Point;

lazy_static! {
    /// Parsed registry shared by every coordinate system accessor
    pub(crate) static ref REGISTRY: SystemRegistry = {
        let content = include_str!("../../coordinate_systems.toml");
        SystemRegistry::from_str(content).unwrap_or_else(|e| {
            // A malformed embedded registry is a build defect, not input
            panic!("Embedded coordinate system registry is invalid: {}", e)
        })
    };
}

/// Static attributes of one reference system
#[derive(Debug)]
pub(crate) struct SystemDefinition {
    pub epsg: u32,
    pub label: String,
    pub proj: String,
    pub bounds: Option<Bounds>,
    pub tile_origin: Point,
}

/// The shared Swiss zoom pyramid anchor table
#[derive(Debug)]
pub(crate) struct SwissPyramid {
    /// Resolutions in m/px, descending, one per Swiss zoom level
    pub resolutions: Vec<f64>,
    /// Equivalent standard (web-tile) zoom for each Swiss zoom level
    pub standard_zooms: Vec<f64>,
}

/// Container for all parsed system definitions
#[derive(Debug)]
pub(crate) struct SystemRegistry {
    pub lv95: SystemDefinition,
    pub lv03: SystemDefinition,
    pub wgs84: SystemDefinition,
    pub web_mercator: SystemDefinition,
    pub swiss_pyramid: SwissPyramid,
}

impl SystemRegistry {
    /// Parse the registry from a TOML string
    pub fn from_str(content: &str) -> Result<Self, String> {
        let toml_value: toml::Value = content
            .parse()
            .map_err(|e| format!("failed to parse TOML: {}", e))?;

        Ok(SystemRegistry {
            lv95: Self::parse_system(&toml_value, "lv95")?,
            lv03: Self::parse_system(&toml_value, "lv03")?,
            wgs84: Self::parse_system(&toml_value, "wgs84")?,
            web_mercator: Self::parse_system(&toml_value, "web_mercator")?,
            swiss_pyramid: Self::parse_pyramid(&toml_value)?,
        })
    }

    fn parse_system(root: &toml::Value, name: &str) -> Result<SystemDefinition, String> {
        let table = root
            .get(name)
            .and_then(|v| v.as_table())
            .ok_or_else(|| format!("missing [{}] table", name))?;

        let epsg = table
            .get("epsg")
            .and_then(|v| v.as_integer())
            .ok_or_else(|| format!("[{}] is missing an epsg code", name))? as u32;
        let label = table
            .get("label")
            .and_then(|v| v.as_str())
            .ok_or_else(|| format!("[{}] is missing a label", name))?
            .to_string();
        let proj = table
            .get("proj")
            .and_then(|v| v.as_str())
            .ok_or_else(|| format!("[{}] is missing a proj descriptor", name))?
            .to_string();

        let bounds = match table.get("bounds") {
            Some(value) => {
                let values = Self::parse_float_array(value, 4, name, "bounds")?;
                let mut bounds = Bounds::new(values[0], values[1], values[2], values[3]);
                if let Some(center) = table.get("center") {
                    let c = Self::parse_float_array(center, 2, name, "center")?;
                    bounds = bounds.with_center(Point::new(c[0], c[1]));
                }
                Some(bounds)
            }
            None => None,
        };

        let origin_value = table
            .get("tile_origin")
            .ok_or_else(|| format!("[{}] is missing a tile_origin", name))?;
        let origin = Self::parse_float_array(origin_value, 2, name, "tile_origin")?;

        Ok(SystemDefinition {
            epsg,
            label,
            proj,
            bounds,
            tile_origin: Point::new(origin[0], origin[1]),
        })
    }

    fn parse_pyramid(root: &toml::Value) -> Result<SwissPyramid, String> {
        let table = root
            .get("swiss_pyramid")
            .and_then(|v| v.as_table())
            .ok_or_else(|| "missing [swiss_pyramid] table".to_string())?;

        let resolutions = Self::parse_float_list(table.get("resolutions"), "resolutions")?;
        let standard_zooms = Self::parse_float_list(table.get("standard_zooms"), "standard_zooms")?;

        if resolutions.is_empty() || resolutions.len() != standard_zooms.len() {
            return Err(format!(
                "swiss_pyramid tables disagree: {} resolutions vs {} standard zooms",
                resolutions.len(),
                standard_zooms.len()
            ));
        }
        if resolutions.windows(2).any(|pair| pair[0] <= pair[1]) {
            return Err("swiss_pyramid resolutions must be strictly decreasing".to_string());
        }
        if standard_zooms.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err("swiss_pyramid standard zooms must be strictly increasing".to_string());
        }

        Ok(SwissPyramid {
            resolutions,
            standard_zooms,
        })
    }

    fn parse_float_array(
        value: &toml::Value,
        expected: usize,
        system: &str,
        field: &str,
    ) -> Result<Vec<f64>, String> {
        let values = Self::parse_float_list(Some(value), field)?;
        if values.len() != expected {
            return Err(format!(
                "[{}] {} needs {} values, found {}",
                system,
                field,
                expected,
                values.len()
            ));
        }
        Ok(values)
    }

    fn parse_float_list(value: Option<&toml::Value>, field: &str) -> Result<Vec<f64>, String> {
        let array = value
            .and_then(|v| v.as_array())
            .ok_or_else(|| format!("{} must be an array of numbers", field))?;
        array
            .iter()
            .map(|v| {
                v.as_float()
                    .or_else(|| v.as_integer().map(|i| i as f64))
                    .ok_or_else(|| format!("{} contains a non-numeric value", field))
            })
            .collect()
    }
}
