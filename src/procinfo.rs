//! Process table and host information.
//!
//! Listing is best effort: a process that exits or hides its details while we
//! walk the table is skipped, never reported as a failure.

use crate::error::ShellError;
use std::env;
use std::fs;

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessEntry {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemSnapshot {
    pub host: Option<String>,
    pub os: String,
    pub cpus: Option<usize>,
    pub load: Option<String>,
    pub mem_total_kb: Option<u64>,
    pub mem_available_kb: Option<u64>,
}

pub trait ProcessTable {
    fn list(&self) -> Result<Vec<ProcessEntry>, ShellError>;
    fn kill(&self, pid: u32) -> Result<(), ShellError>;
    fn snapshot(&self) -> SystemSnapshot;
}

/// The real process table of this machine.
pub struct SystemProcesses;

impl ProcessTable for SystemProcesses {
    fn list(&self) -> Result<Vec<ProcessEntry>, ShellError> {
        let mut procs = list_processes()?;
        procs.sort_by_key(|p| p.pid);
        Ok(procs)
    }

    fn kill(&self, pid: u32) -> Result<(), ShellError> {
        kill_process(pid)
    }

    fn snapshot(&self) -> SystemSnapshot {
        let (mem_total_kb, mem_available_kb) = fs::read_to_string("/proc/meminfo")
            .map(|text| parse_meminfo(&text))
            .unwrap_or((None, None));

        SystemSnapshot {
            host: host_name(),
            os: os_description(),
            cpus: std::thread::available_parallelism().ok().map(|n| n.get()),
            load: fs::read_to_string("/proc/loadavg")
                .ok()
                .and_then(|text| parse_loadavg(&text)),
            mem_total_kb,
            mem_available_kb,
        }
    }
}

#[cfg(target_os = "linux")]
fn list_processes() -> Result<Vec<ProcessEntry>, ShellError> {
    let entries = fs::read_dir("/proc").map_err(|e| ShellError::from_io(e, "/proc"))?;
    let uptime = fs::read_to_string("/proc/uptime")
        .ok()
        .and_then(|text| text.split_whitespace().next()?.parse::<f64>().ok());
    let ticks = clock_ticks();

    let mut procs = Vec::new();
    for entry in entries.flatten() {
        let Some(pid) = entry.file_name().to_str().and_then(|s| s.parse::<u32>().ok()) else {
            continue;
        };
        let Ok(stat) = fs::read_to_string(entry.path().join("stat")) else {
            log::debug!("Skipping pid {}: stat unreadable", pid);
            continue;
        };
        if let Some(proc_entry) = parse_stat(pid, &stat, uptime, ticks) {
            procs.push(proc_entry);
        }
    }
    Ok(procs)
}

#[cfg(all(unix, not(target_os = "linux")))]
fn list_processes() -> Result<Vec<ProcessEntry>, ShellError> {
    let output = std::process::Command::new("ps")
        .args(["-axo", "pid=,pcpu=,comm="])
        .output()
        .map_err(|e| ShellError::from_io(e, "ps"))?;
    let text = String::from_utf8_lossy(&output.stdout);
    Ok(text.lines().filter_map(parse_ps_line).collect())
}

#[cfg(not(unix))]
fn list_processes() -> Result<Vec<ProcessEntry>, ShellError> {
    Err(ShellError::Unsupported("process_list".to_string()))
}

#[cfg(target_os = "linux")]
fn clock_ticks() -> f64 {
    // SAFETY: sysconf only reads a system constant.
    let ticks = unsafe { libc::sysconf(libc::_SC_CLK_TCK) };
    if ticks > 0 { ticks as f64 } else { 100.0 }
}

/// Parses `/proc/<pid>/stat`. cpu% is CPU time over the process lifetime,
/// the same figure `ps` prints.
#[cfg(any(test, target_os = "linux"))]
fn parse_stat(pid: u32, stat: &str, uptime_secs: Option<f64>, ticks: f64) -> Option<ProcessEntry> {
    // The command name is wrapped in parens and may itself contain spaces or ')'
    let open = stat.find('(')?;
    let close = stat.rfind(')')?;
    let name = stat.get(open + 1..close)?.to_string();

    // Fields after the name start at field 3 (state)
    let fields: Vec<&str> = stat.get(close + 1..)?.split_whitespace().collect();
    let utime: f64 = fields.get(11)?.parse().ok()?;
    let stime: f64 = fields.get(12)?.parse().ok()?;
    let start: f64 = fields.get(19)?.parse().ok()?;

    let cpu_percent = match uptime_secs {
        Some(up) => {
            let elapsed = up - start / ticks;
            if elapsed > 0.0 {
                ((utime + stime) / ticks / elapsed * 100.0) as f32
            } else {
                0.0
            }
        }
        None => 0.0,
    };

    Some(ProcessEntry {
        pid,
        name,
        cpu_percent,
    })
}

#[cfg(any(test, all(unix, not(target_os = "linux"))))]
fn parse_ps_line(line: &str) -> Option<ProcessEntry> {
    let mut parts = line.split_whitespace();
    let pid = parts.next()?.parse().ok()?;
    let cpu_percent = parts.next()?.parse().ok()?;
    let command = parts.collect::<Vec<_>>().join(" ");
    let name = command.rsplit('/').next().unwrap_or(&command).to_string();
    if name.is_empty() {
        return None;
    }
    Some(ProcessEntry {
        pid,
        name,
        cpu_percent,
    })
}

#[cfg(unix)]
fn kill_process(pid: u32) -> Result<(), ShellError> {
    // 0 and negative values address process groups in kill(2)
    let raw = i32::try_from(pid)
        .ok()
        .filter(|p| *p > 0)
        .ok_or_else(|| ShellError::Input(format!("PID {} is out of range", pid)))?;

    // SAFETY: kill(2) takes plain integers and targets exactly one process here.
    let rc = unsafe { libc::kill(raw, libc::SIGKILL) };
    if rc == 0 {
        log::info!("Killed process {}", pid);
        return Ok(());
    }

    let err = std::io::Error::last_os_error();
    let subject = format!("PID {}", pid);
    match err.raw_os_error() {
        Some(libc::ESRCH) => Err(ShellError::NotFound(subject)),
        Some(libc::EPERM) => Err(ShellError::PermissionDenied(subject)),
        _ => Err(ShellError::Os {
            subject,
            source: err,
        }),
    }
}

#[cfg(not(unix))]
fn kill_process(_pid: u32) -> Result<(), ShellError> {
    Err(ShellError::Unsupported("kill".to_string()))
}

fn host_name() -> Option<String> {
    env::var("HOSTNAME")
        .or_else(|_| env::var("COMPUTERNAME"))
        .ok()
        .or_else(|| fs::read_to_string("/etc/hostname").ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn os_description() -> String {
    let pretty = fs::read_to_string("/etc/os-release").ok().and_then(|text| {
        text.lines()
            .find_map(|l| l.strip_prefix("PRETTY_NAME="))
            .map(|v| v.trim_matches('"').to_string())
    });
    match pretty {
        Some(name) => format!("{} ({})", name, env::consts::ARCH),
        None => format!("{} ({})", env::consts::OS, env::consts::ARCH),
    }
}

fn parse_meminfo(text: &str) -> (Option<u64>, Option<u64>) {
    let field = |name: &str| {
        text.lines()
            .find_map(|l| l.strip_prefix(name))
            .and_then(|rest| rest.split_whitespace().next())
            .and_then(|v| v.parse::<u64>().ok())
    };
    (field("MemTotal:"), field("MemAvailable:"))
}

fn parse_loadavg(text: &str) -> Option<String> {
    let parts: Vec<&str> = text.split_whitespace().take(3).collect();
    if parts.len() == 3 {
        Some(parts.join(" "))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stat() {
        let stat = "4242 (my (odd) proc) S 1 4242 4242 0 -1 4194560 1000 0 0 0 \
                    300 100 0 0 20 0 1 0 1000 12345678 200 18446744073709551615";
        let entry = parse_stat(4242, stat, Some(110.0), 100.0).unwrap();
        assert_eq!(entry.pid, 4242);
        assert_eq!(entry.name, "my (odd) proc");
        // 4s of CPU over 100s alive
        assert!((entry.cpu_percent - 4.0).abs() < 0.01);
    }

    #[test]
    fn test_parse_stat_truncated() {
        assert!(parse_stat(1, "1 (init) S 0 1", Some(10.0), 100.0).is_none());
        assert!(parse_stat(1, "garbage", None, 100.0).is_none());
    }

    #[test]
    fn test_parse_ps_line() {
        let entry = parse_ps_line("  311   2.5 /usr/sbin/cron").unwrap();
        assert_eq!(entry.pid, 311);
        assert_eq!(entry.name, "cron");
        assert_eq!(entry.cpu_percent, 2.5);
        assert!(parse_ps_line("not a process").is_none());
    }

    #[test]
    fn test_parse_meminfo_and_load() {
        let text = "MemTotal:       16318244 kB\nMemFree:  100 kB\nMemAvailable:    8000000 kB\n";
        assert_eq!(parse_meminfo(text), (Some(16318244), Some(8000000)));
        assert_eq!(parse_loadavg("0.52 0.58 0.59 1/1234 5678\n").unwrap(), "0.52 0.58 0.59");
        assert!(parse_loadavg("").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_kill_twice() {
        let mut child = std::process::Command::new("sleep").arg("30").spawn().unwrap();
        let pid = child.id();

        let table = SystemProcesses;
        assert!(table.kill(pid).is_ok());
        // Reap it so the pid really disappears
        child.wait().unwrap();
        assert!(matches!(table.kill(pid), Err(ShellError::NotFound(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_kill_rejects_group_pids() {
        let table = SystemProcesses;
        assert!(matches!(table.kill(0), Err(ShellError::Input(_))));
        assert!(matches!(table.kill(u32::MAX), Err(ShellError::Input(_))));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_list_contains_self() {
        let me = std::process::id();
        let procs = SystemProcesses.list().unwrap();
        assert!(procs.iter().any(|p| p.pid == me));
    }
}
