use crate::prelude::{println, *};
use fbgraph_core::GeoLocation;

#[derive(Debug, clap::Args, Clone)]
pub struct GeoOptions {
    /// Latitude in decimal degrees
    #[arg(allow_negative_numbers = true)]
    pub latitude: f64,

    /// Longitude in decimal degrees
    #[arg(allow_negative_numbers = true)]
    pub longitude: f64,

    /// Output the JSON representation instead of the request parameter
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: GeoOptions, global: crate::Global) -> Result<()> {
    let location = GeoLocation::new(options.latitude, options.longitude);

    if global.verbose {
        println!("{}", location);
    }

    println!("{}", format_location(&location, options.json)?);

    Ok(())
}

/// Render a location as the `coordinates` request parameter or as JSON
///
/// JSON cannot carry non-finite numbers, so those are rejected instead of
/// printing `null`.
fn format_location(location: &GeoLocation, json: bool) -> Result<String> {
    if !json {
        return Ok(location.as_parameter_string());
    }

    if !location.is_finite() {
        return Err(eyre!(
            "Cannot encode {} as JSON: coordinates must be finite",
            location
        ));
    }

    Ok(location.as_json_string())
}
