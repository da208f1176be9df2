use sysinfo::Components;

fn main() {
    let components = Components::new_with_refreshed_list();
    for comp in &components {
        println!("temp: {:?} = {:?}", comp.label(), comp.temperature());
    }
    if components.iter().count() == 0 {
        println!("No temperature components found via sysinfo");
    }

    if let Ok(entries) = std::fs::read_dir("/sys/class/hwmon") {
        for entry in entries.flatten() {
            for n in 1..=8 {
                let path = entry.path().join(format!("fan{n}_input"));
                if let Ok(raw) = std::fs::read_to_string(&path) {
                    println!("fan: {} = {}", path.display(), raw.trim());
                }
            }
        }
    }
}
