use std::fs;
use std::path::{Path, PathBuf};

use sysinfo::{Components, System};

use crate::model::{DeviceKind, HardwareDevice, Sensor, SensorKind};

const HWMON_ROOT: &str = "/sys/class/hwmon";
const MAX_FAN_CHANNELS: u32 = 8;

/// Builds the typed device list for one tick: temperature components
/// bucketed by label, CPU load sensors, and hwmon fan tachometers.
pub fn collect_devices(components: &Components, sys: &System) -> Vec<HardwareDevice> {
    let mut devices = Vec::new();

    for comp in components {
        let kind = kind_for_label(comp.label());
        device_for(&mut devices, kind).sensors.push(Sensor {
            name: comp.label().to_owned(),
            kind: SensorKind::Temperature,
            value: comp.temperature(),
        });
    }

    let cpu = device_for(&mut devices, DeviceKind::Cpu);
    for (i, core) in sys.cpus().iter().enumerate() {
        cpu.sensors.push(Sensor {
            name: format!("CPU Core #{}", i + 1),
            kind: SensorKind::Load,
            value: Some(core.cpu_usage()),
        });
    }
    // The total goes last so it wins over per-core readings.
    cpu.sensors.push(Sensor {
        name: "CPU Total".to_owned(),
        kind: SensorKind::Load,
        value: Some(sys.global_cpu_usage()),
    });

    let fans = fan_sensors(Path::new(HWMON_ROOT));
    if !fans.is_empty() {
        device_for(&mut devices, DeviceKind::Motherboard)
            .sensors
            .extend(fans);
    }

    devices
}

pub(crate) fn kind_for_label(label: &str) -> DeviceKind {
    let lower = label.to_lowercase();
    if lower.contains("nvidia") {
        DeviceKind::GpuNvidia
    } else if lower.contains("amdgpu") || lower.contains("radeon") || lower.contains("gpu") {
        DeviceKind::GpuAmd
    } else if lower.contains("nvme") || lower.contains("ssd") || lower.contains("nand") || lower.contains("disk") {
        DeviceKind::Storage
    } else if lower.contains("battery") || lower.starts_with("bat") {
        DeviceKind::Battery
    } else if lower.contains("smc") || lower.contains("embedded controller") {
        DeviceKind::Controller
    } else if lower.contains("cpu")
        || lower.contains("core")
        || lower.contains("package")
        || lower.contains("tctl")
        || lower.contains("tdie")
        || lower.contains("k10temp")
        || lower.contains("coretemp")
    {
        DeviceKind::Cpu
    } else {
        DeviceKind::Motherboard
    }
}

fn device_for(devices: &mut Vec<HardwareDevice>, kind: DeviceKind) -> &mut HardwareDevice {
    let pos = match devices.iter().position(|d| d.kind == kind) {
        Some(pos) => pos,
        None => {
            devices.push(HardwareDevice {
                kind,
                sensors: Vec::new(),
            });
            devices.len() - 1
        }
    };
    &mut devices[pos]
}

/// Scans hwmon chips for fan tachometers (and their PWM duty, where
/// exposed). A missing or unreadable tree yields no sensors. A readable
/// channel with an unparsable value still yields a valueless sensor.
pub(crate) fn fan_sensors(root: &Path) -> Vec<Sensor> {
    let mut sensors = Vec::new();
    let Ok(entries) = fs::read_dir(root) else {
        return sensors;
    };
    // Directory order is arbitrary; sort so last-match-wins is stable
    // within a boot.
    let mut chips: Vec<PathBuf> = entries.flatten().map(|e| e.path()).collect();
    chips.sort();

    for chip_dir in chips {
        let chip = read_trimmed(&chip_dir.join("name")).unwrap_or_else(|| "hwmon".to_owned());
        for n in 1..=MAX_FAN_CHANNELS {
            let input = chip_dir.join(format!("fan{n}_input"));
            if !input.exists() {
                continue;
            }
            let name = read_trimmed(&chip_dir.join(format!("fan{n}_label")))
                .unwrap_or_else(|| format!("{chip} Fan #{n}"));
            sensors.push(Sensor {
                name,
                kind: SensorKind::Fan,
                value: read_trimmed(&input).and_then(|raw| raw.parse().ok()),
            });
            if let Some(duty) =
                read_trimmed(&chip_dir.join(format!("pwm{n}"))).and_then(|raw| raw.parse().ok())
            {
                sensors.push(Sensor {
                    name: format!("{chip} PWM #{n}"),
                    kind: SensorKind::Other,
                    value: Some(duty),
                });
            }
        }
    }

    sensors
}

fn read_trimmed(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .ok()
        .map(|raw| raw.trim().to_owned())
        .filter(|raw| !raw.is_empty())
}
