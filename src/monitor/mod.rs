mod drive;
mod hardware;
mod power;
mod process;

use battery::Manager;
use log::warn;
use sysinfo::{Components, Disks, ProcessesToUpdate, System};

use crate::model::Snapshot;

/// Hardware provider adapter plus the process/drive/battery inspectors.
/// Opened once at startup; lives for the whole process, no teardown path.
pub struct SystemMonitor {
    sys: System,
    components: Components,
    disks: Disks,
    batteries: Option<Manager>,
}

impl SystemMonitor {
    /// Initializes sensor discovery for every hardware category. A category
    /// that cannot be brought up yields empty readings rather than failing.
    pub fn open() -> Self {
        let mut sys = System::new_all();
        sys.refresh_cpu_usage();
        let components = Components::new_with_refreshed_list();
        let disks = Disks::new_with_refreshed_list();
        let batteries = match Manager::new() {
            Ok(manager) => Some(manager),
            Err(err) => {
                warn!("battery category unavailable: {err}");
                None
            }
        };

        Self {
            sys,
            components,
            disks,
            batteries,
        }
    }

    /// Pulls live values from every facility and rebuilds the per-tick
    /// snapshot. Sensors with nothing to report this tick carry `None`.
    pub fn snapshot(&mut self) -> Snapshot {
        self.sys.refresh_cpu_usage();
        self.sys.refresh_processes(ProcessesToUpdate::All, true);
        self.components.refresh(true);
        self.disks.refresh(true);

        Snapshot {
            devices: hardware::collect_devices(&self.components, &self.sys),
            battery_percent: power::charge_percent(self.batteries.as_ref()),
            drives: drive::collect(&self.disks),
            processes: process::running_names(&self.sys),
        }
    }
}
