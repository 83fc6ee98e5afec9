//! Output formatting for estimates and the vehicle list.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use farmhaul_lib::{TripEstimate, VehicleCatalog, VehicleProfile};

use crate::terminal::{
    currency_symbol, format_with_separators, supports_color, supports_unicode, ColorPalette,
};

/// Disclaimer printed under every text estimate.
pub const ESTIMATE_NOTE: &str = "Note: This is only an estimate. Actual rates depend on market \
conditions, weather and other factors.";

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable result card.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Terminal capabilities used by the text renderers.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub palette: ColorPalette,
    pub unicode: bool,
}

impl TextStyle {
    /// Detect color and Unicode support from the environment.
    pub fn detect() -> Self {
        Self {
            palette: ColorPalette::detect(),
            unicode: supports_unicode(),
        }
    }

    /// Plain ASCII with no escape codes.
    pub const fn plain() -> Self {
        Self {
            palette: ColorPalette::plain(),
            unicode: false,
        }
    }
}

impl OutputFormat {
    /// Write an estimate to stdout in this format.
    pub fn render_estimate(self, estimate: &TripEstimate) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        match self {
            OutputFormat::Text => write_estimate_text(&mut stdout, estimate, TextStyle::detect()),
            OutputFormat::Json => write_json(&mut stdout, estimate),
        }
    }

    /// Write the vehicle catalog to stdout in this format.
    pub fn render_vehicles(self, catalog: &VehicleCatalog) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        match self {
            OutputFormat::Text => {
                write_vehicles_text(&mut stdout, catalog, TextStyle::detect().unicode)
            }
            OutputFormat::Json => write_json(&mut stdout, &catalog.vehicles()),
        }
    }
}

/// Print the CLI banner.
pub fn print_logo() {
    let palette = ColorPalette::detect();
    if supports_unicode() {
        println!(
            "{green}╭──────────────────────────────────────╮
│  farmhaul · transport cost estimator │
╰──────────────────────────────────────╯{reset}",
            green = palette.green,
            reset = palette.reset
        );
    } else {
        println!(
            "{green}+--------------------------------------+
|  FARMHAUL  >> TRANSPORT CALCULATOR   |
+--------------------------------------+{reset}",
            green = palette.green,
            reset = palette.reset
        );
    }
}

/// Print the footer with elapsed time.
pub fn print_footer(elapsed: std::time::Duration) {
    let (gray, reset) = if supports_color() {
        (crate::terminal::colors::GRAY, crate::terminal::colors::RESET)
    } else {
        ("", "")
    };

    let elapsed_ms = elapsed.as_millis();
    let time_str = if elapsed_ms < 1000 {
        format!("{}ms", elapsed_ms)
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    };

    println!("\n{gray}Completed in {}{reset}", time_str);
}

/// Render an estimate as the result card shown after "calculate".
///
/// Only the total carries thousand separators; the breakdown lines show the
/// plain rounded amounts.
pub fn write_estimate_text<W: Write>(
    out: &mut W,
    estimate: &TripEstimate,
    style: TextStyle,
) -> io::Result<()> {
    let p = &style.palette;
    let currency = currency_symbol(style.unicode);

    match (&estimate.from_location, &estimate.to_location) {
        (Some(from), Some(to)) => {
            let arrow = if style.unicode { "→" } else { "->" };
            writeln!(out, "Transport estimate: {from} {arrow} {to}")?;
        }
        (Some(from), None) => writeln!(out, "Transport estimate from {from}")?,
        (None, Some(to)) => writeln!(out, "Transport estimate to {to}")?,
        (None, None) => writeln!(out, "Transport estimate")?,
    }

    writeln!(
        out,
        "\n{gray}Total estimated cost:{reset} {green}{currency}{total}{reset}",
        gray = p.gray,
        reset = p.reset,
        green = p.green,
        total = format_with_separators(estimate.total_cost),
    )?;
    writeln!(
        out,
        "{gray}Estimated time:{reset}       {cyan}{} hours{reset}",
        estimate.estimated_hours_display,
        gray = p.gray,
        reset = p.reset,
        cyan = p.cyan,
    )?;
    writeln!(
        out,
        "{gray}Trips required:{reset}       {cyan}{}{reset}",
        estimate.trips_required,
        gray = p.gray,
        reset = p.reset,
        cyan = p.cyan,
    )?;
    writeln!(out)?;
    writeln!(out, "Base rate:   {currency}{}", estimate.base_cost)?;
    writeln!(out, "Fuel cost:   {currency}{}", estimate.fuel_cost)?;
    writeln!(
        out,
        "Vehicle:     {}{}{}",
        p.white_bold,
        vehicle_label(&estimate.vehicle, style.unicode),
        p.reset
    )?;
    writeln!(
        out,
        "Fuel price:  {currency}{}/liter",
        estimate.fuel_price_per_liter
    )?;
    writeln!(out, "\n{}{}{}", p.yellow, ESTIMATE_NOTE, p.reset)?;
    Ok(())
}

/// Render the catalog as a table in catalog order.
pub fn write_vehicles_text<W: Write>(
    out: &mut W,
    catalog: &VehicleCatalog,
    unicode: bool,
) -> io::Result<()> {
    let vehicles = catalog.vehicles();
    if vehicles.is_empty() {
        writeln!(out, "No vehicles available in catalog.")?;
        return Ok(());
    }

    writeln!(out, "Available vehicles ({}):", vehicles.len())?;
    writeln!(
        out,
        "{:<16} {:<28} {:>10} {:>12}",
        "Id", "Vehicle", "Rate/km", "Km/liter"
    )?;
    for vehicle in vehicles {
        writeln!(
            out,
            "{:<16} {:<28} {:>10} {:>12}",
            vehicle.id,
            vehicle.capacity_label(),
            vehicle.rate_per_km,
            vehicle.fuel_efficiency_km_per_liter
        )?;
        if unicode {
            if let Some(local) = &vehicle.local_name {
                writeln!(out, "{:<16} {}", "", local)?;
            }
        }
    }
    Ok(())
}

fn vehicle_label(vehicle: &VehicleProfile, unicode: bool) -> String {
    match (&vehicle.local_name, unicode) {
        (Some(local), true) => format!("{} ({})", vehicle.display_name, local),
        _ => vehicle.display_name.clone(),
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")
}
