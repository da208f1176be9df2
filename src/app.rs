use log::debug;

use crate::classify;
use crate::error::Result;
use crate::model::PanelSlots;
use crate::monitor::SystemMonitor;
use crate::ui::panel::TextPanel;

/// Owns the provider handle and the display slots; there is exactly one
/// thread touching either.
pub struct App {
    monitor: SystemMonitor,
    slots: PanelSlots,
    panel: TextPanel,
}

impl App {
    pub fn open() -> Self {
        Self {
            monitor: SystemMonitor::open(),
            slots: PanelSlots::default(),
            panel: TextPanel::new(),
        }
    }

    /// One scheduler tick: refresh hardware, reclassify, redraw. Slots whose
    /// source produced nothing this cycle keep their previous text.
    pub fn tick(&mut self) -> Result<()> {
        let snapshot = self.monitor.snapshot();
        debug!(
            "tick: {} devices, {} drives, {} processes",
            snapshot.devices.len(),
            snapshot.drives.len(),
            snapshot.processes.len()
        );
        classify::apply_all(&snapshot, &mut self.slots);
        self.panel.render(&self.slots)?;
        Ok(())
    }
}
