//! Raw observation previews: METAR text and sounding text.

use crate::ApiArgs;
use avwx_core::datetime::{parse_date_time, SoundingTime, SurfaceRange};
use avwx_core::station::{Icao, StationId};
use log::info;

pub async fn run_metar(api: &ApiArgs, icao: &str, start: &str, end: &str) -> anyhow::Result<()> {
    let icao: Icao = icao.to_uppercase().parse()?;
    let range = SurfaceRange::from_date_times(&parse_date_time(start)?, &parse_date_time(end)?);
    let (start, end) = range.to_wire()?;

    let client = api.client()?;
    info!("Fetching METAR for {} from {} to {}", icao, start, end);
    let text = client.metar_preview(&start, &end, &icao).await?;
    println!("{}", text);
    Ok(())
}

pub async fn run_sounding(api: &ApiArgs, station: &str, date: &str, hour: &str) -> anyhow::Result<()> {
    let station: StationId = station.trim().parse()?;
    let time = SoundingTime {
        date: date.to_string(),
        hour: hour.to_string(),
    };
    let datetime = time.to_wire()?;

    let client = api.client()?;
    info!("Fetching sounding for {} at {}", station, datetime);
    let text = client.upper_air_preview(&datetime, &station).await?;
    println!("{}", text);
    Ok(())
}
