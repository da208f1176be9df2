/// Hardware categories the provider enumerates sensors for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceKind {
    Cpu,
    GpuAmd,
    GpuNvidia,
    Battery,
    Storage,
    Motherboard,
    Controller,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorKind {
    Temperature,
    Fan,
    Load,
    Other,
}

/// One named measurement on a device. `value` is `None` when the driver
/// reported nothing this tick.
#[derive(Clone, Debug)]
pub struct Sensor {
    pub name: String,
    pub kind: SensorKind,
    pub value: Option<f32>,
}

#[derive(Clone, Debug)]
pub struct HardwareDevice {
    pub kind: DeviceKind,
    pub sensors: Vec<Sensor>,
}

#[derive(Clone, Debug)]
pub struct DriveStatus {
    pub name: String,
    pub mount_point: String,
    pub is_ready: bool,
    pub free_bytes: u64,
}

/// Everything one tick reads, rebuilt from scratch each time.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    pub devices: Vec<HardwareDevice>,
    pub battery_percent: Option<u32>,
    pub drives: Vec<DriveStatus>,
    pub processes: Vec<String>,
}

/// The eight display slots. Each field is overwritten independently; a slot
/// whose source produced nothing this tick keeps its previous text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanelSlots {
    pub cpu_temp: String,
    pub gpu_temp: String,
    pub fan_speed: String,
    pub cpu_load: String,
    pub battery_status: String,
    pub storage: String,
    pub mic_status: String,
    pub cam_status: String,
}
