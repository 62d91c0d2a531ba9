//! Environment report backing `roadmap check` and the day 1 lesson.

#[cfg(feature = "cli")]
use sysinfo::System;

#[derive(Debug, Clone)]
pub struct EnvReport {
    pub os: String,
    pub kernel: String,
    pub host: String,
    pub cpu_count: usize,
    pub total_memory_mb: u64,
    pub rustc: Option<String>,
    pub cargo: Option<String>,
}

#[cfg(feature = "cli")]
impl EnvReport {
    pub fn collect() -> Self {
        let mut system = System::new_all();
        system.refresh_all();

        let os = match (System::name(), System::os_version()) {
            (Some(name), Some(version)) => format!("{} {}", name, version),
            (Some(name), None) => name,
            _ => "unknown".to_string(),
        };

        Self {
            os,
            kernel: System::kernel_version().unwrap_or_else(|| "unknown".to_string()),
            host: System::host_name().unwrap_or_else(|| "unknown".to_string()),
            cpu_count: system.cpus().len(),
            total_memory_mb: system.total_memory() / 1024 / 1024,
            rustc: tool_version("rustc"),
            cargo: tool_version("cargo"),
        }
    }
}

// Without the cli feature there is no sysinfo; the toolchain probes still work.
#[cfg(not(feature = "cli"))]
impl EnvReport {
    pub fn collect() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            kernel: "unknown".to_string(),
            host: "unknown".to_string(),
            cpu_count: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            total_memory_mb: 0,
            rustc: tool_version("rustc"),
            cargo: tool_version("cargo"),
        }
    }
}

impl EnvReport {
    /// Both `rustc` and `cargo` answered `--version`.
    pub fn toolchain_ok(&self) -> bool {
        self.rustc.is_some() && self.cargo.is_some()
    }

    pub fn lines(&self) -> Vec<String> {
        let missing = "not found on PATH".to_string();
        vec![
            format!("OS:      {}", self.os),
            format!("Kernel:  {}", self.kernel),
            format!("Host:    {}", self.host),
            format!("CPUs:    {}", self.cpu_count),
            format!("Memory:  {} MB", self.total_memory_mb),
            format!("rustc:   {}", self.rustc.clone().unwrap_or_else(|| missing.clone())),
            format!("cargo:   {}", self.cargo.clone().unwrap_or(missing)),
        ]
    }
}

impl std::fmt::Display for EnvReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

fn tool_version(tool: &str) -> Option<String> {
    let output = std::process::Command::new(tool).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    text.lines().next().map(|line| line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_has_all_lines() {
        let report = EnvReport::collect();
        assert_eq!(report.lines().len(), 7);
    }

    #[test]
    fn missing_tool_probes_as_none() {
        assert_eq!(tool_version("definitely-not-a-real-binary-xyz"), None);
    }
}
