//! Windows-specific container configuration, including Hyper-V containers.

use ocispec_core::{Field, FieldKind, Result, Schema, TypedObject};

pub struct Windows;

impl Schema for Windows {
    const NAME: &'static str = "Windows";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("LayerFolders", FieldKind::strings()).json("layerFolders").required())?
            .declare(
                Field::new("Devices", FieldKind::objects::<WindowsDevice>())
                    .json("devices")
                    .omit_empty(),
            )?
            .declare(
                Field::new("Resources", FieldKind::object::<WindowsResources>())
                    .json("resources")
                    .omit_empty(),
            )?
            .declare(Field::new("CredentialSpec", FieldKind::Map).json("credentialSpec").omit_empty())?
            .declare(Field::new("Servicing", FieldKind::BOOLEAN).json("servicing").omit_empty())?
            .declare(
                Field::new("IgnoreFlushesDuringBoot", FieldKind::BOOLEAN)
                    .json("ignoreFlushesDuringBoot")
                    .omit_empty(),
            )?
            .declare(
                Field::new("HyperV", FieldKind::object::<WindowsHyperV>())
                    .json("hyperv")
                    .omit_empty(),
            )?
            .declare(
                Field::new("Network", FieldKind::object::<WindowsNetwork>())
                    .json("network")
                    .omit_empty(),
            )?;
        Ok(())
    }
}

/// A host device mapped into the container.
pub struct WindowsDevice;

impl Schema for WindowsDevice {
    const NAME: &'static str = "WindowsDevice";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("ID", FieldKind::STRING).json("id").required())?
            .declare(Field::new("IDType", FieldKind::STRING).json("idType").required())?;
        Ok(())
    }
}

pub struct WindowsResources;

impl Schema for WindowsResources {
    const NAME: &'static str = "WindowsResources";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(
                Field::new("Memory", FieldKind::object::<WindowsMemoryResources>())
                    .json("memory")
                    .omit_empty(),
            )?
            .declare(
                Field::new("CPU", FieldKind::object::<WindowsCPUResources>())
                    .json("cpu")
                    .omit_empty(),
            )?
            .declare(
                Field::new("Storage", FieldKind::object::<WindowsStorageResources>())
                    .json("storage")
                    .omit_empty(),
            )?;
        Ok(())
    }
}

pub struct WindowsMemoryResources;

impl Schema for WindowsMemoryResources {
    const NAME: &'static str = "WindowsMemoryResources";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object.declare(Field::new("Limit", FieldKind::INTEGER).json("limit").omit_empty())?;
        Ok(())
    }
}

pub struct WindowsCPUResources;

impl Schema for WindowsCPUResources {
    const NAME: &'static str = "WindowsCPUResources";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("Count", FieldKind::INTEGER).json("count").omit_empty())?
            .declare(Field::new("Shares", FieldKind::INTEGER).json("shares").omit_empty())?
            // Percentage times 100.
            .declare(Field::new("Maximum", FieldKind::INTEGER).json("maximum").omit_empty())?;
        Ok(())
    }
}

pub struct WindowsStorageResources;

impl Schema for WindowsStorageResources {
    const NAME: &'static str = "WindowsStorageResources";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("Iops", FieldKind::INTEGER).json("iops").omit_empty())?
            .declare(Field::new("Bps", FieldKind::INTEGER).json("bps").omit_empty())?
            .declare(Field::new("SandboxSize", FieldKind::INTEGER).json("sandboxSize").omit_empty())?;
        Ok(())
    }
}

pub struct WindowsHyperV;

impl Schema for WindowsHyperV {
    const NAME: &'static str = "WindowsHyperV";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object.declare(Field::new("UtilityVMPath", FieldKind::STRING).json("utilityVMPath").omit_empty())?;
        Ok(())
    }
}

pub struct WindowsNetwork;

impl Schema for WindowsNetwork {
    const NAME: &'static str = "WindowsNetwork";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("EndpointList", FieldKind::strings()).json("endpointList").omit_empty())?
            .declare(
                Field::new("AllowUnqualifiedDNSQuery", FieldKind::BOOLEAN)
                    .json("allowUnqualifiedDNSQuery")
                    .omit_empty(),
            )?
            .declare(Field::new("DNSSearchList", FieldKind::strings()).json("DNSSearchList").omit_empty())?
            .declare(
                Field::new("NetworkSharedContainerName", FieldKind::STRING)
                    .json("networkSharedContainerName")
                    .omit_empty(),
            )?
            .declare(
                Field::new("NetworkNamespace", FieldKind::STRING)
                    .json("networkNamespace")
                    .omit_empty(),
            )?;
        Ok(())
    }
}
