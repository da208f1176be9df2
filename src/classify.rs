//! Maps a refreshed snapshot onto the display slots.
//!
//! Every routine is independent and runs in a fixed order each tick. Within
//! one routine a later matching sensor overwrites an earlier one
//! (last-match-wins). A sensor that exists but carries no value this tick
//! still overwrites its slot, with an empty numeric part; a metric with no
//! matching source at all leaves its slot untouched.

use crate::model::{DeviceKind, PanelSlots, SensorKind, Snapshot};

const GIB: u64 = 1024 * 1024 * 1024;

pub fn apply_all(snapshot: &Snapshot, slots: &mut PanelSlots) {
    apply_temperatures(snapshot, slots);
    apply_battery(snapshot, slots);
    apply_activity(snapshot, slots);
    apply_storage(snapshot, slots);
    apply_fan_and_load(snapshot, slots);
}

fn apply_temperatures(snapshot: &Snapshot, slots: &mut PanelSlots) {
    for device in &snapshot.devices {
        for sensor in &device.sensors {
            if sensor.kind != SensorKind::Temperature {
                continue;
            }
            match device.kind {
                DeviceKind::Cpu => {
                    // Some Ryzen parts label the die sensor "Core (Tctl/Tdie)"
                    // instead of "Package".
                    if sensor.name.contains("Package")
                        || sensor.name.contains("Core (Tctl/Tdie)")
                    {
                        slots.cpu_temp = fmt_celsius(sensor.value);
                    }
                }
                DeviceKind::GpuAmd | DeviceKind::GpuNvidia => {
                    slots.gpu_temp = fmt_celsius(sensor.value);
                }
                _ => {}
            }
        }
    }
}

fn apply_battery(snapshot: &Snapshot, slots: &mut PanelSlots) {
    if let Some(percent) = snapshot.battery_percent {
        slots.battery_status = format!("Charge: {percent}%");
    }
}

fn apply_activity(snapshot: &Snapshot, slots: &mut PanelSlots) {
    // Heuristic by process name, not a capability check: audiodg runs for
    // any audio session, not just capture.
    let mic = snapshot
        .processes
        .iter()
        .any(|name| name.to_lowercase().contains("audiodg"));
    let cam = snapshot
        .processes
        .iter()
        .any(|name| name.to_lowercase().contains("camera"));

    slots.mic_status = active_label(mic);
    slots.cam_status = active_label(cam);
}

fn apply_storage(snapshot: &Snapshot, slots: &mut PanelSlots) {
    if let Some(drive) = snapshot.drives.iter().find(|d| d.is_ready) {
        slots.storage = format!("Free: {} GB", drive.free_bytes / GIB);
    }
}

fn apply_fan_and_load(snapshot: &Snapshot, slots: &mut PanelSlots) {
    for device in &snapshot.devices {
        for sensor in &device.sensors {
            match sensor.kind {
                SensorKind::Fan => slots.fan_speed = fmt_rpm(sensor.value),
                SensorKind::Load if sensor.name.contains("CPU") => {
                    slots.cpu_load = fmt_percent(sensor.value);
                }
                _ => {}
            }
        }
    }
}

fn fmt_celsius(value: Option<f32>) -> String {
    match value {
        Some(v) => format!("{v:.1} °C"),
        None => " °C".to_owned(),
    }
}

fn fmt_rpm(value: Option<f32>) -> String {
    match value {
        Some(v) => format!("{v:.0} RPM"),
        None => " RPM".to_owned(),
    }
}

fn fmt_percent(value: Option<f32>) -> String {
    match value {
        Some(v) => format!("{v:.1} %"),
        None => " %".to_owned(),
    }
}

fn active_label(active: bool) -> String {
    let label = if active { "Active" } else { "Inactive" };
    label.to_owned()
}
