//! `show system` inventory report.
//!
//! The report is rendered in a fixed order: header block (switch version and
//! subsystem `other_info`), fans, LEDs, power supplies, temperature sensors.
//! Missing rows are logged and rendered as blanks; the report never aborts
//! on missing data.

use tracing::error;

use ops_sysd_common::tables::keys::other_info;
use ops_sysd_common::{
    Fan, PowerSupply, PowerSupplyStatus, RowIter, RowStore, Smap, SmapExt, Subsystem, SysdError,
    SysdResult, System,
};

use crate::vty::{CmdStatus, Vty};
use crate::{vty_line, vty_out};

/// Label of the first header line
pub const SWITCH_VERSION_LABEL: &str = "OpenSwitch Version";

const LABEL_WIDTH: usize = 20;
const LABEL_SEPARATOR: &str = ": ";

/// What follows a header field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineEnd {
    /// Next field continues on the same line
    Continue,
    /// End of line
    Newline,
    /// End of line followed by an empty line
    BlankLine,
}

/// One `other_info` field of the header block
#[derive(Debug, Clone, Copy)]
struct HeaderField {
    label: &'static str,
    key: &'static str,
    width: usize,
    suffix: &'static str,
    end: LineEnd,
}

const fn field(label: &'static str, key: &'static str, width: usize, end: LineEnd) -> HeaderField {
    HeaderField {
        label,
        key,
        width,
        suffix: "",
        end,
    }
}

static HEADER_FIELDS: [HeaderField; 13] = [
    field("Product Name", other_info::PRODUCT_NAME, 30, LineEnd::BlankLine),
    field("Vendor", other_info::VENDOR, 30, LineEnd::Newline),
    field("Platform", other_info::PLATFORM_NAME, 30, LineEnd::Newline),
    field("Manufacturer", other_info::MANUFACTURER, 20, LineEnd::Newline),
    field("Manufacturer Date", other_info::MANUFACTURE_DATE, 20, LineEnd::BlankLine),
    field("Serial Number", other_info::SERIAL_NUMBER, 20, LineEnd::Continue),
    field("Label Revision", other_info::LABEL_REVISION, 10, LineEnd::BlankLine),
    field("ONIE Version", other_info::ONIE_VERSION, 20, LineEnd::Continue),
    field("DIAG Version", other_info::DIAG_VERSION, 10, LineEnd::Newline),
    field("Base MAC Address", other_info::BASE_MAC_ADDRESS, 20, LineEnd::Continue),
    field("Number of MACs", other_info::NUMBER_OF_MACS, 5, LineEnd::Newline),
    field("Interface Count", other_info::INTERFACE_COUNT, 20, LineEnd::Continue),
    HeaderField {
        label: "Max Interface Speed",
        key: other_info::MAX_INTERFACE_SPEED,
        width: 6,
        suffix: "Mbps",
        end: LineEnd::Newline,
    },
];

fn render_field(vty: &mut Vty, label: &str, value: Option<&str>, width: usize, suffix: &str) {
    vty_out!(
        vty,
        "{:<lw$}{}{:<width$}{}",
        label,
        LABEL_SEPARATOR,
        value.unwrap_or(""),
        suffix,
        lw = LABEL_WIDTH,
        width = width
    );
}

fn end_line(vty: &mut Vty, end: LineEnd) {
    match end {
        LineEnd::Continue => {}
        LineEnd::Newline => vty.nl(),
        LineEnd::BlankLine => {
            vty.nl();
            vty.nl();
        }
    }
}

/// Renders the header block. A missing row contributes blank fields.
fn format_sys_output(vty: &mut Vty, subsystem: Option<&Subsystem>, system: Option<&System>) {
    let empty = Smap::new();
    let info = subsystem.map(|s| &s.other_info).unwrap_or(&empty);

    render_field(
        vty,
        SWITCH_VERSION_LABEL,
        system.and_then(|s| s.switch_version.as_deref()),
        30,
        "",
    );
    vty.nl();

    for f in &HEADER_FIELDS {
        render_field(vty, f.label, info.get_field(f.key), f.width, f.suffix);
        end_line(vty, f.end);
    }
}

/// Maps a raw power supply status token to its display form.
///
/// Tokens outside the schema enum pass through unchanged.
pub fn format_psu_status(raw: &str) -> &str {
    PowerSupplyStatus::from_raw(raw)
        .map(|status| status.display_str())
        .unwrap_or(raw)
}

/// Formats a millidegree reading as Celsius with two decimals.
///
/// The reading is divided by 1000 with integer division before conversion,
/// so the fractional part is always `.00`.
pub fn format_temperature(millidegrees: i64) -> String {
    let celsius = (millidegrees / 1000) as f64;
    format!("{:3.2}", celsius)
}

/// Collects a table into a locally owned buffer sorted by `key`.
///
/// The sort is stable: rows with equal keys keep store order.
fn sorted_snapshot<'a, T, F>(rows: RowIter<'a, T>, what: &str, key: F) -> SysdResult<Vec<&'a T>>
where
    F: Fn(&T) -> &str,
{
    let (lower, _) = rows.size_hint();
    let mut snapshot: Vec<&'a T> = Vec::new();
    snapshot
        .try_reserve_exact(lower)
        .map_err(|_| SysdError::resource_exhausted(what))?;

    for row in rows {
        snapshot
            .try_reserve(1)
            .map_err(|_| SysdError::resource_exhausted(what))?;
        snapshot.push(row);
    }

    snapshot.sort_by(|a, b| key(*a).cmp(key(*b)));
    Ok(snapshot)
}

fn fan_name(fan: &Fan) -> &str {
    &fan.name
}

fn psu_name(psu: &PowerSupply) -> &str {
    &psu.name
}

/// Fans sorted ascending by name.
pub fn sorted_fans<S: RowStore + ?Sized>(store: &S) -> SysdResult<Vec<&Fan>> {
    sorted_snapshot(store.fans(), "fan sort buffer", fan_name)
}

/// Power supplies sorted ascending by name.
pub fn sorted_power_supplies<S: RowStore + ?Sized>(store: &S) -> SysdResult<Vec<&PowerSupply>> {
    sorted_snapshot(store.power_supplies(), "power supply sort buffer", psu_name)
}

fn section_title(vty: &mut Vty, title: &str) {
    vty.nl();
    vty_line!(vty, "{}", title);
    vty.nl();
}

fn render_fans<S: RowStore + ?Sized>(store: &S, vty: &mut Vty, count: usize) -> SysdResult<()> {
    section_title(vty, "Fan details:");
    vty_line!(vty, "{:<15}{:<10}{:<10}", "Name", "Speed", "Status");
    vty_line!(vty, "{}", "-".repeat(32));

    if count == 0 {
        return Ok(());
    }

    for fan in sorted_fans(store)? {
        vty_line!(vty, "{:<15}{:<10}{:<10}", fan.name, fan.speed, fan.status);
    }
    Ok(())
}

fn render_leds<S: RowStore + ?Sized>(store: &S, vty: &mut Vty, count: usize) {
    section_title(vty, "LED details:");
    vty_line!(vty, "{:<10}{:<10}{:<8}", "Name", "State", "Status");
    vty_line!(vty, "{}", "-".repeat(25));

    if count == 0 {
        return;
    }

    for led in store.leds() {
        vty_line!(vty, "{:<10}{:<10}{:<8}", led.id, led.state, led.status);
    }
}

fn render_power_supplies<S: RowStore + ?Sized>(
    store: &S,
    vty: &mut Vty,
    count: usize,
) -> SysdResult<()> {
    section_title(vty, "Power supply details:");
    vty_line!(vty, "{:<10}{:<10}", "Name", "Status");
    vty_line!(vty, "{}", "-".repeat(23));

    if count == 0 {
        return Ok(());
    }

    for psu in sorted_power_supplies(store)? {
        vty_line!(vty, "{:<10}{:<10}", psu.name, format_psu_status(&psu.status));
    }
    Ok(())
}

fn render_temp_sensors<S: RowStore + ?Sized>(store: &S, vty: &mut Vty, count: usize) {
    section_title(vty, "Temperature Sensors:");

    if count == 0 {
        vty_line!(vty, "{:<10}{:<10}{:<18}", "Location", "Name", "Reading(celsius)");
        vty_line!(vty, "{}", "-".repeat(36));
        return;
    }

    vty_line!(vty, "{:<50}{:<10}{:<18}", "Location", "Name", "Reading(celsius)");
    vty_line!(vty, "{}", "-".repeat(75));
    for sensor in store.temp_sensors() {
        vty_line!(
            vty,
            "{:<50}{:<10}{}",
            sensor.location,
            sensor.name,
            format_temperature(sensor.temperature)
        );
    }
}

/// Writes the full `show system` report into `vty`.
///
/// Data rows of each table are rendered only when the Subsystem row reports
/// a non-zero count for that component. The only error is failure to
/// allocate a sort buffer.
pub fn generate_system_report<S: RowStore + ?Sized>(store: &S, vty: &mut Vty) -> SysdResult<()> {
    let subsystem = store.first_subsystem();
    let system = store.first_system();

    if subsystem.is_none() || system.is_none() {
        error!("Unable to retrieve data");
    }

    if subsystem.is_some() || system.is_some() {
        format_sys_output(vty, subsystem, system);
    }

    render_fans(store, vty, subsystem.map_or(0, Subsystem::n_fans))?;
    render_leds(store, vty, subsystem.map_or(0, Subsystem::n_leds));
    render_power_supplies(store, vty, subsystem.map_or(0, Subsystem::n_power_supplies))?;
    render_temp_sensors(store, vty, subsystem.map_or(0, Subsystem::n_temp_sensors));

    Ok(())
}

/// Renders the `show system` report as a string with `\n` line endings.
pub fn system_report<S: RowStore + ?Sized>(store: &S) -> SysdResult<String> {
    let mut vty = Vty::new();
    generate_system_report(store, &mut vty)?;
    Ok(vty.into_string())
}

/// `show system` command handler.
pub fn cli_system_get_all<S: RowStore + ?Sized>(store: &S, vty: &mut Vty) -> CmdStatus {
    match generate_system_report(store, vty) {
        Ok(()) => CmdStatus::Success,
        Err(e) => {
            error!("show system failed: {}", e);
            CmdStatus::Warning
        }
    }
}
