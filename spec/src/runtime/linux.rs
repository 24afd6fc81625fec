//! Linux-specific container configuration.

use ocispec_core::{Field, FieldKind, Result, Schema, SpecError, TypedObject, Value};

/// Namespace kinds a container may create or join.
pub const NAMESPACE_TYPE_PATTERN: &str = "^(pid|network|mount|ipc|uts|user|cgroup)$";

pub struct Linux;

impl Schema for Linux {
    const NAME: &'static str = "Linux";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(
                Field::new("UIDMappings", FieldKind::objects::<LinuxIDMapping>())
                    .json("uidMappings")
                    .omit_empty(),
            )?
            .declare(
                Field::new("GIDMappings", FieldKind::objects::<LinuxIDMapping>())
                    .json("gidMappings")
                    .omit_empty(),
            )?
            .declare(Field::new("Sysctl", FieldKind::Map).json("sysctl").omit_empty())?
            .declare(
                Field::new("Resources", FieldKind::object::<LinuxResources>())
                    .json("resources")
                    .omit_empty(),
            )?
            .declare(Field::new("CgroupsPath", FieldKind::STRING).json("cgroupsPath").omit_empty())?
            .declare(
                Field::new("Namespaces", FieldKind::objects::<LinuxNamespace>())
                    .json("namespaces")
                    .omit_empty(),
            )?
            .declare(
                Field::new("Devices", FieldKind::objects::<LinuxDevice>())
                    .json("devices")
                    .omit_empty(),
            )?
            .declare(
                Field::new("Seccomp", FieldKind::object::<LinuxSeccomp>())
                    .json("seccomp")
                    .omit_empty(),
            )?
            .declare(
                Field::new("RootfsPropagation", FieldKind::STRING)
                    .json("rootfsPropagation")
                    .omit_empty(),
            )?
            .declare(Field::new("MaskedPaths", FieldKind::strings()).json("maskedPaths").omit_empty())?
            .declare(
                Field::new("ReadonlyPaths", FieldKind::strings())
                    .json("readonlyPaths")
                    .omit_empty(),
            )?
            .declare(Field::new("MountLabel", FieldKind::STRING).json("mountLabel").omit_empty())?
            .declare(
                Field::new("IntelRdt", FieldKind::object::<LinuxIntelRdt>())
                    .json("intelRdt")
                    .omit_empty(),
            )?
            .declare(
                Field::new("Personality", FieldKind::object::<LinuxPersonality>())
                    .json("personality")
                    .omit_empty(),
            )?;
        Ok(())
    }
}

/// User namespace id mapping.
pub struct LinuxIDMapping;

impl Schema for LinuxIDMapping {
    const NAME: &'static str = "LinuxIDMapping";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("ContainerID", FieldKind::INTEGER).json("containerID").required())?
            .declare(Field::new("HostID", FieldKind::INTEGER).json("hostID").required())?
            .declare(Field::new("Size", FieldKind::INTEGER).json("size").required())?;
        Ok(())
    }
}

pub struct LinuxNamespace;

impl Schema for LinuxNamespace {
    const NAME: &'static str = "LinuxNamespace";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(
                Field::new("Type", FieldKind::STRING)
                    .json("type")
                    .pattern(NAMESPACE_TYPE_PATTERN)
                    .required(),
            )?
            .declare(Field::new("Path", FieldKind::STRING).json("path").omit_empty())?;
        Ok(())
    }
}

/// A device node created in the container.
pub struct LinuxDevice;

impl Schema for LinuxDevice {
    const NAME: &'static str = "LinuxDevice";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("Path", FieldKind::STRING).json("path").required())?
            .declare(Field::new("Type", FieldKind::STRING).json("type").required())?
            .declare(Field::new("Major", FieldKind::INTEGER).json("major").required())?
            .declare(Field::new("Minor", FieldKind::INTEGER).json("minor").required())?
            .declare(Field::new("FileMode", FieldKind::INTEGER).json("fileMode").omit_empty())?
            .declare(Field::new("UID", FieldKind::INTEGER).json("uid").omit_empty())?
            .declare(Field::new("GID", FieldKind::INTEGER).json("gid").omit_empty())?;
        Ok(())
    }
}

/// Device cgroup rule.
pub struct LinuxDeviceCgroup;

impl Schema for LinuxDeviceCgroup {
    const NAME: &'static str = "LinuxDeviceCgroup";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("Allow", FieldKind::BOOLEAN).json("allow").required())?
            .declare(Field::new("Type", FieldKind::STRING).json("type").omit_empty())?
            .declare(Field::new("Major", FieldKind::INTEGER).json("major").omit_empty())?
            .declare(Field::new("Minor", FieldKind::INTEGER).json("minor").omit_empty())?
            .declare(Field::new("Access", FieldKind::STRING).json("access").omit_empty())?;
        Ok(())
    }
}

/// Cgroup resource limits.
pub struct LinuxResources;

impl Schema for LinuxResources {
    const NAME: &'static str = "LinuxResources";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(
                Field::new("Devices", FieldKind::objects::<LinuxDeviceCgroup>())
                    .json("devices")
                    .omit_empty(),
            )?
            .declare(
                Field::new("Memory", FieldKind::object::<LinuxMemory>())
                    .json("memory")
                    .omit_empty(),
            )?
            .declare(Field::new("CPU", FieldKind::object::<LinuxCPU>()).json("cpu").omit_empty())?
            .declare(Field::new("Pids", FieldKind::object::<LinuxPids>()).json("pids").omit_empty())?
            .declare(
                Field::new("BlockIO", FieldKind::object::<LinuxBlockIO>())
                    .json("blockIO")
                    .omit_empty(),
            )?
            .declare(
                Field::new("HugepageLimits", FieldKind::objects::<LinuxHugepageLimit>())
                    .json("hugepageLimits")
                    .omit_empty(),
            )?
            .declare(
                Field::new("Network", FieldKind::object::<LinuxNetwork>())
                    .json("network")
                    .omit_empty(),
            )?
            // Keyed by device name; each entry is a LinuxRdma.
            .declare(Field::new("Rdma", FieldKind::Map).json("rdma").omit_empty())?;
        Ok(())
    }

    fn check(object: &TypedObject) -> Result<()> {
        let Some(rdma) = object.value("Rdma").and_then(Value::as_map) else {
            return Ok(());
        };
        for (device, limits) in rdma {
            LinuxRdma::from_json(limits.clone()).map_err(|e| SpecError::CrossFieldValidation {
                schema: Self::NAME.to_string(),
                message: format!("rdma limits for {}: {}", device, e),
            })?;
        }
        Ok(())
    }
}

/// RDMA cgroup limits for one device.
pub struct LinuxRdma;

impl Schema for LinuxRdma {
    const NAME: &'static str = "LinuxRdma";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("HcaHandles", FieldKind::INTEGER).json("hcaHandles").omit_empty())?
            .declare(Field::new("HcaObjects", FieldKind::INTEGER).json("hcaObjects").omit_empty())?;
        Ok(())
    }
}

pub struct LinuxNetwork;

impl Schema for LinuxNetwork {
    const NAME: &'static str = "LinuxNetwork";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("ClassID", FieldKind::INTEGER).json("classID").omit_empty())?
            .declare(
                Field::new("Priorities", FieldKind::objects::<LinuxInterfacePriority>())
                    .json("priorities")
                    .omit_empty(),
            )?;
        Ok(())
    }
}

pub struct LinuxInterfacePriority;

impl Schema for LinuxInterfacePriority {
    const NAME: &'static str = "LinuxInterfacePriority";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("Name", FieldKind::STRING).json("name").required())?
            .declare(Field::new("Priority", FieldKind::INTEGER).json("priority").required())?;
        Ok(())
    }
}

pub struct LinuxPids;

impl Schema for LinuxPids {
    const NAME: &'static str = "LinuxPids";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object.declare(Field::new("Limit", FieldKind::INTEGER).json("limit").required())?;
        Ok(())
    }
}

pub struct LinuxCPU;

impl Schema for LinuxCPU {
    const NAME: &'static str = "LinuxCPU";

    fn declare(object: &mut TypedObject) -> Result<()> {
        for (name, wire) in [
            ("Shares", "shares"),
            ("Quota", "quota"),
            ("Period", "period"),
            ("RealtimeRuntime", "realtimeRuntime"),
            ("RealtimePeriod", "realtimePeriod"),
        ] {
            object.declare(Field::new(name, FieldKind::INTEGER).json(wire).omit_empty())?;
        }
        object
            .declare(Field::new("Cpus", FieldKind::STRING).json("cpus").omit_empty())?
            .declare(Field::new("Mems", FieldKind::STRING).json("mems").omit_empty())?;
        Ok(())
    }
}

pub struct LinuxMemory;

impl Schema for LinuxMemory {
    const NAME: &'static str = "LinuxMemory";

    fn declare(object: &mut TypedObject) -> Result<()> {
        for (name, wire) in [
            ("Limit", "limit"),
            ("Reservation", "reservation"),
            ("Swap", "swap"),
            ("Kernel", "kernel"),
            ("KernelTCP", "kernelTCP"),
            ("Swappiness", "swappiness"),
        ] {
            object.declare(Field::new(name, FieldKind::INTEGER).json(wire).omit_empty())?;
        }
        object
            .declare(
                Field::new("DisableOOMKiller", FieldKind::BOOLEAN)
                    .json("disableOOMKiller")
                    .omit_empty(),
            )?
            .declare(Field::new("UseHierarchy", FieldKind::BOOLEAN).json("useHierarchy").omit_empty())?;
        Ok(())
    }
}

pub struct LinuxBlockIO;

impl Schema for LinuxBlockIO {
    const NAME: &'static str = "LinuxBlockIO";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("Weight", FieldKind::INTEGER).json("weight").omit_empty())?
            .declare(Field::new("LeafWeight", FieldKind::INTEGER).json("leafWeight").omit_empty())?
            .declare(
                Field::new("WeightDevice", FieldKind::objects::<LinuxWeightDevice>())
                    .json("weightDevice")
                    .omit_empty(),
            )?;
        for (name, wire) in [
            ("ThrottleReadBpsDevice", "throttleReadBpsDevice"),
            ("ThrottleWriteBpsDevice", "throttleWriteBpsDevice"),
            ("ThrottleReadIOPSDevice", "throttleReadIOPSDevice"),
            ("ThrottleWriteIOPSDevice", "throttleWriteIOPSDevice"),
        ] {
            object.declare(
                Field::new(name, FieldKind::objects::<LinuxThrottleDevice>())
                    .json(wire)
                    .omit_empty(),
            )?;
        }
        Ok(())
    }
}

pub struct LinuxThrottleDevice;

impl Schema for LinuxThrottleDevice {
    const NAME: &'static str = "LinuxThrottleDevice";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("Major", FieldKind::INTEGER).json("major").required())?
            .declare(Field::new("Minor", FieldKind::INTEGER).json("minor").required())?
            .declare(Field::new("Rate", FieldKind::INTEGER).json("rate").required())?;
        Ok(())
    }
}

pub struct LinuxWeightDevice;

impl Schema for LinuxWeightDevice {
    const NAME: &'static str = "LinuxWeightDevice";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("Major", FieldKind::INTEGER).json("major").required())?
            .declare(Field::new("Minor", FieldKind::INTEGER).json("minor").required())?
            .declare(Field::new("Weight", FieldKind::INTEGER).json("weight").omit_empty())?
            .declare(Field::new("LeafWeight", FieldKind::INTEGER).json("leafWeight").omit_empty())?;
        Ok(())
    }
}

pub struct LinuxHugepageLimit;

impl Schema for LinuxHugepageLimit {
    const NAME: &'static str = "LinuxHugepageLimit";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("Pagesize", FieldKind::STRING).json("pageSize").required())?
            .declare(Field::new("Limit", FieldKind::INTEGER).json("limit").required())?;
        Ok(())
    }
}

/// Syscall filtering.
pub struct LinuxSeccomp;

impl Schema for LinuxSeccomp {
    const NAME: &'static str = "LinuxSeccomp";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("DefaultAction", FieldKind::STRING).json("defaultAction").required())?
            .declare(
                Field::new("Architectures", FieldKind::strings())
                    .json("architectures")
                    .omit_empty(),
            )?
            .declare(Field::new("Flags", FieldKind::strings()).json("flags").omit_empty())?
            .declare(
                Field::new("Syscalls", FieldKind::objects::<LinuxSyscall>())
                    .json("syscalls")
                    .omit_empty(),
            )?;
        Ok(())
    }
}

pub struct LinuxSyscall;

impl Schema for LinuxSyscall {
    const NAME: &'static str = "LinuxSyscall";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("Names", FieldKind::strings()).json("names").required())?
            .declare(Field::new("Action", FieldKind::STRING).json("action").required())?
            .declare(
                Field::new("Args", FieldKind::objects::<LinuxSeccompArg>())
                    .json("args")
                    .omit_empty(),
            )?;
        Ok(())
    }
}

pub struct LinuxSeccompArg;

impl Schema for LinuxSeccompArg {
    const NAME: &'static str = "LinuxSeccompArg";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("Index", FieldKind::INTEGER).json("index").required())?
            .declare(Field::new("Value", FieldKind::INTEGER).json("value").required())?
            .declare(Field::new("ValueTwo", FieldKind::INTEGER).json("valueTwo").omit_empty())?
            .declare(Field::new("Op", FieldKind::STRING).json("op").required())?;
        Ok(())
    }
}

/// Intel RDT cache and memory bandwidth allocation.
pub struct LinuxIntelRdt;

impl Schema for LinuxIntelRdt {
    const NAME: &'static str = "LinuxIntelRdt";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("ClosID", FieldKind::STRING).json("closID").omit_empty())?
            .declare(Field::new("L3CacheSchema", FieldKind::STRING).json("l3CacheSchema").omit_empty())?
            .declare(Field::new("MemBwSchema", FieldKind::STRING).json("memBwSchema").omit_empty())?;
        Ok(())
    }
}

/// Input to the personality syscall.
pub struct LinuxPersonality;

impl Schema for LinuxPersonality {
    const NAME: &'static str = "LinuxPersonality";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("Domain", FieldKind::STRING).json("domain").required())?
            .declare(Field::new("Flags", FieldKind::strings()).json("flags").omit_empty())?;
        Ok(())
    }
}
