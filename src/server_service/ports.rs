// Render the engine's published-port table as display lines.

use bollard::models::PortMap;

/// One line per container-port/host-binding pair, sorted as plain strings
/// (so "8080/tcp" sorts before "9/udp"). Ports without a binding still get a line.
pub(crate) fn format_ports(ports: Option<&PortMap>) -> Vec<String> {
    let Some(ports) = ports else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    for (container_port, bindings) in ports {
        match bindings.as_deref() {
            None | Some([]) => lines.push(format!("{container_port} -> (not published)")),
            Some(bindings) => {
                for b in bindings {
                    let host_ip = b.host_ip.as_deref().unwrap_or_default();
                    let host_port = b.host_port.as_deref().unwrap_or_default();
                    lines.push(format!("{container_port} -> {host_ip}:{host_port}"));
                }
            }
        }
    }
    lines.sort();
    lines
}
