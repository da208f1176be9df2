use std::io::{self, Stdout, Write};

use crate::model::PanelSlots;

const CLEAR: &str = "\x1b[2J\x1b[1;1H";

/// The presentation layer: redraws the eight slot strings as labeled text
/// lines each tick.
pub struct TextPanel {
    out: Stdout,
}

impl TextPanel {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }

    pub fn render(&mut self, slots: &PanelSlots) -> io::Result<()> {
        let mut out = self.out.lock();
        write!(out, "{CLEAR}")?;
        write_slots(&mut out, slots)?;
        out.flush()
    }
}

fn write_slots<W: Write>(out: &mut W, slots: &PanelSlots) -> io::Result<()> {
    writeln!(out, "CPU Temp   {}", slots.cpu_temp)?;
    writeln!(out, "GPU Temp   {}", slots.gpu_temp)?;
    writeln!(out, "Fan Speed  {}", slots.fan_speed)?;
    writeln!(out, "CPU Load   {}", slots.cpu_load)?;
    writeln!(out, "Battery    {}", slots.battery_status)?;
    writeln!(out, "Storage    {}", slots.storage)?;
    writeln!(out, "Mic        {}", slots.mic_status)?;
    writeln!(out, "Camera     {}", slots.cam_status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_labeled_line_per_slot() {
        let slots = PanelSlots {
            cpu_temp: "55.3 °C".to_owned(),
            gpu_temp: "70.0 °C".to_owned(),
            fan_speed: "1350 RPM".to_owned(),
            cpu_load: "12.5 %".to_owned(),
            battery_status: "Charge: 87%".to_owned(),
            storage: "Free: 5 GB".to_owned(),
            mic_status: "Inactive".to_owned(),
            cam_status: "Active".to_owned(),
        };

        let mut buf = Vec::new();
        write_slots(&mut buf, &slots).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(text.lines().count(), 8);
        assert!(text.contains("CPU Temp   55.3 °C"));
        assert!(text.contains("Battery    Charge: 87%"));
        assert!(text.contains("Camera     Active"));
    }
}
