use sysinfo::System;

/// Names of all running processes, for the mic/camera activity heuristic.
pub fn running_names(sys: &System) -> Vec<String> {
    sys.processes()
        .values()
        .map(|p| p.name().to_string_lossy().into_owned())
        .collect()
}
