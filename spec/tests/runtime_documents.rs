//! Integration test: runtime-spec documents end to end.
//!
//! Loads a full Linux `config.json`, exercises platform tagging and checks
//! that rejected documents report the field at fault.
//!
//! ## Running
//!
//! ```bash
//! cargo test -p ocispec --test runtime_documents
//! ```

use ocispec::runtime::{Linux, Process, Spec, State, User};
use ocispec::{KeyStyle, Schema, SerializeOptions, SpecError, Value};
use serde_json::json;

fn linux_config() -> serde_json::Value {
    json!({
        "ociVersion": "1.0.1",
        "process": {
            "terminal": true,
            "user": {"uid": 1, "gid": 1, "additionalGids": [5, 6]},
            "args": ["sh"],
            "env": ["PATH=/usr/local/sbin:/usr/local/bin:/usr/sbin:/usr/bin:/sbin:/bin", "TERM=xterm"],
            "cwd": "/",
            "capabilities": {
                "bounding": ["CAP_AUDIT_WRITE", "CAP_KILL", "CAP_NET_BIND_SERVICE"],
                "permitted": ["CAP_AUDIT_WRITE", "CAP_KILL", "CAP_NET_BIND_SERVICE"]
            },
            "rlimits": [{"type": "RLIMIT_CORE", "hard": 1024, "soft": 1024}],
            "apparmorProfile": "acme_secure_profile",
            "oomScoreAdj": 100,
            "selinuxLabel": "system_u:system_r:svirt_lxc_net_t:s0:c124,c675",
            "noNewPrivileges": true
        },
        "root": {"path": "rootfs", "readonly": true},
        "hostname": "slartibartfast",
        "mounts": [
            {"destination": "/proc", "type": "proc", "source": "proc"},
            {"destination": "/dev", "type": "tmpfs", "source": "tmpfs", "options": ["nosuid", "strictatime", "mode=755", "size=65536k"]}
        ],
        "hooks": {
            "prestart": [{"path": "/usr/bin/fix-mounts", "args": ["fix-mounts", "arg1", "arg2"], "env": ["key1=value1"]}],
            "poststart": [{"path": "/usr/bin/notify-start", "timeout": 5}]
        },
        "linux": {
            "devices": [{"path": "/dev/fuse", "type": "c", "major": 10, "minor": 229, "fileMode": 438, "uid": 0, "gid": 0}],
            "uidMappings": [{"containerID": 0, "hostID": 1000, "size": 32000}],
            "gidMappings": [{"containerID": 0, "hostID": 1000, "size": 32000}],
            "sysctl": {"net.ipv4.ip_forward": "1", "net.core.somaxconn": "256"},
            "cgroupsPath": "/myRuntime/myContainer",
            "resources": {
                "pids": {"limit": 32771},
                "hugepageLimits": [{"pageSize": "2MB", "limit": 9223372036854772000u64}],
                "memory": {"limit": 536870912, "reservation": 536870912, "swappiness": 0},
                "cpu": {"shares": 1024, "quota": 1000000, "period": 500000, "cpus": "2-3", "mems": "0-7"},
                "devices": [{"allow": false, "access": "rwm"}, {"allow": true, "type": "c", "major": 10, "minor": 229, "access": "rw"}],
                "rdma": {"mlx5_1": {"hcaHandles": 3, "hcaObjects": 10000}}
            },
            "rootfsPropagation": "slave",
            "seccomp": {
                "defaultAction": "SCMP_ACT_ALLOW",
                "architectures": ["SCMP_ARCH_X86", "SCMP_ARCH_X32"],
                "syscalls": [{"names": ["getcwd", "chmod"], "action": "SCMP_ACT_ERRNO"}]
            },
            "namespaces": [
                {"type": "pid"},
                {"type": "network"},
                {"type": "ipc"},
                {"type": "uts"},
                {"type": "mount"},
                {"type": "user"},
                {"type": "cgroup"}
            ],
            "maskedPaths": ["/proc/kcore", "/proc/latency_stats"],
            "readonlyPaths": ["/proc/asound", "/proc/bus"],
            "mountLabel": "system_u:object_r:svirt_sandbox_file_t:s0:c715,c811"
        },
        "annotations": {"com.example.key1": "value1"}
    })
}

#[test]
fn test_full_linux_config_roundtrip() {
    let input = linux_config();
    let spec = Spec::from_json(input.clone()).unwrap();
    let output = spec.to_json_value(KeyStyle::Wire).unwrap();
    assert_eq!(output, input);
    assert_eq!(Spec::from_json(output).unwrap(), spec);
}

#[test]
fn test_nested_objects_have_their_schemas() {
    let spec = Spec::from_json(linux_config()).unwrap();

    let process = spec.value("Process").and_then(Value::as_object).unwrap();
    assert_eq!(process.schema_name(), Process::NAME);
    let user = process.value("User").and_then(Value::as_object).unwrap();
    assert_eq!(user.schema_name(), User::NAME);

    let linux = spec.value("Linux").and_then(Value::as_object).unwrap();
    assert_eq!(linux.schema_name(), Linux::NAME);
    let namespaces = linux.value("Namespaces").and_then(Value::as_sequence).unwrap();
    assert_eq!(namespaces.len(), 7);
}

#[test]
fn test_bad_namespace_fails_the_whole_document() {
    let mut input = linux_config();
    input["linux"]["namespaces"][0]["type"] = json!("pidns");
    let err = Spec::from_json(input).unwrap_err();
    assert!(matches!(err, SpecError::PatternMismatch { ref value, .. } if value == "pidns"));
}

#[test]
fn test_unknown_nested_key_is_a_schema_error() {
    let mut input = linux_config();
    input["process"]["user"]["name"] = json!("root");
    let err = Spec::from_json(input).unwrap_err();
    assert!(err.is_schema_error());
    assert!(matches!(err, SpecError::UnknownField { ref schema, ref field } if schema == "User" && field == "name"));
}

#[test]
fn test_platform_tags() {
    let spec = Spec::new_object().unwrap();
    let linux: Vec<_> = spec.fields_for_platform("linux").map(|a| a.name()).collect();
    assert!(linux.contains(&"Linux"));
    assert!(linux.contains(&"Hooks"));
    assert!(!linux.contains(&"Windows"));

    let windows: Vec<_> = spec.fields_for_platform("windows").map(|a| a.name()).collect();
    assert!(windows.contains(&"Windows"));
    assert!(!windows.contains(&"Hooks"));
    assert!(windows.contains(&"Mounts"));
}

#[test]
fn test_windows_config() {
    let spec = Spec::from_json(json!({
        "ociVersion": "1.0.1",
        "process": {
            "user": {"username": "ContainerUser"},
            "commandLine": "cmd.exe /c dir",
            "cwd": "C:\\"
        },
        "windows": {
            "layerFolders": ["C:\\Layers\\layer1"],
            "hyperv": {"utilityVMPath": "C:\\path\\to\\utilityvm"}
        }
    }))
    .unwrap();

    let map = spec.to_map(KeyStyle::Wire).unwrap();
    // uid and gid carry no omit-empty flag.
    assert_eq!(map["process"]["user"], json!({"uid": null, "gid": null, "username": "ContainerUser"}));
}

#[test]
fn test_state_document_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let state = State::create("oci-container1", "running", "/containers/redis", Some(4422)).unwrap();
    state.save(&path, SerializeOptions::pretty()).unwrap();

    let loaded = State::from_file(&path).unwrap();
    assert_eq!(loaded, state);
    assert_eq!(loaded.get("Pid").unwrap(), Some(&Value::from(4422i64)));
}

#[test]
fn test_state_status_is_checked() {
    let err = State::parse(
        r#"{"ociVersion": "1.0.0", "id": "c", "status": "paused", "bundle": "/b"}"#,
    )
    .unwrap_err();
    assert!(matches!(err, SpecError::CrossFieldValidation { .. }));
}

#[test]
fn test_spec_requires_oci_version() {
    let err = Spec::from_json(json!({"hostname": "h"})).unwrap_err();
    assert!(matches!(err, SpecError::RequiredFieldMissing { ref field, .. } if field == "ociVersion"));
}
