use battery::units::ratio::percent;
use battery::Manager;
use log::debug;

/// Charge percentage of the first battery row. Read failures degrade to
/// `None`, which leaves the battery slot untouched.
pub fn charge_percent(manager: Option<&Manager>) -> Option<u32> {
    let batteries = match manager?.batteries() {
        Ok(batteries) => batteries,
        Err(err) => {
            debug!("battery enumeration failed: {err}");
            return None;
        }
    };

    for battery in batteries {
        match battery {
            Ok(battery) => {
                return Some(battery.state_of_charge().get::<percent>().round() as u32)
            }
            Err(err) => debug!("battery row unreadable: {err}"),
        }
    }
    None
}
