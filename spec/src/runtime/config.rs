//! Container configuration (`config.json`).

use ocispec_core::{Field, FieldKind, Result, Schema, TypedObject};

use super::linux::Linux;
use super::solaris::Solaris;
use super::vm::VM;
use super::windows::Windows;

/// Runtime spec version written into new configurations.
pub const SPEC_OCI_VERSION: &str = "1.0.0";

const LINUX: &[&str] = &["linux"];
const POSIX: &[&str] = &["linux", "solaris"];
const WINDOWS: &[&str] = &["windows"];

/// Base configuration for the container.
pub struct Spec;

impl Schema for Spec {
    const NAME: &'static str = "Spec";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("ociVersion", FieldKind::STRING).required())?
            .declare(
                Field::new("Platform", FieldKind::object::<Platform>())
                    .json("platform")
                    .omit_empty(),
            )?
            .declare(
                Field::new("Process", FieldKind::object::<Process>())
                    .json("process")
                    .omit_empty(),
            )?
            .declare(Field::new("Root", FieldKind::object::<Root>()).json("root").omit_empty())?
            .declare(Field::new("Hostname", FieldKind::STRING).json("hostname").omit_empty())?
            .declare(Field::new("Mounts", FieldKind::objects::<Mount>()).json("mounts").omit_empty())?
            .declare(
                Field::new("Hooks", FieldKind::object::<Hooks>())
                    .json("hooks")
                    .omit_empty()
                    .platforms(POSIX),
            )?
            .declare(Field::new("Annotations", FieldKind::Map).json("annotations").omit_empty())?
            .declare(
                Field::new("Linux", FieldKind::object::<Linux>())
                    .json("linux")
                    .omit_empty()
                    .platforms(LINUX),
            )?
            .declare(
                Field::new("Solaris", FieldKind::object::<Solaris>())
                    .json("solaris")
                    .omit_empty()
                    .platforms(&["solaris"]),
            )?
            .declare(
                Field::new("Windows", FieldKind::object::<Windows>())
                    .json("windows")
                    .omit_empty()
                    .platforms(WINDOWS),
            )?
            .declare(
                Field::new("VM", FieldKind::object::<VM>())
                    .json("vm")
                    .omit_empty()
                    .platforms(&["vm"]),
            )?;
        Ok(())
    }
}

impl Spec {
    /// Empty configuration at [`SPEC_OCI_VERSION`].
    pub fn create() -> Result<TypedObject> {
        let mut object = Self::new_object()?;
        object.set("ociVersion", SPEC_OCI_VERSION)?;
        Ok(object)
    }
}

/// Operating system and architecture of the container.
pub struct Platform;

impl Schema for Platform {
    const NAME: &'static str = "RuntimePlatform";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("OS", FieldKind::STRING).json("os").required())?
            .declare(Field::new("Architecture", FieldKind::STRING).json("arch").required())?;
        Ok(())
    }
}

/// The container process.
pub struct Process;

impl Schema for Process {
    const NAME: &'static str = "Process";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("Terminal", FieldKind::BOOLEAN).json("terminal").omit_empty())?
            .declare(
                Field::new("ConsoleSize", FieldKind::object::<ConsoleBox>())
                    .json("consoleSize")
                    .omit_empty(),
            )?
            .declare(Field::new("User", FieldKind::object::<User>()).json("user").required())?
            .declare(Field::new("Args", FieldKind::strings()).json("args").omit_empty())?
            .declare(
                Field::new("CommandLine", FieldKind::STRING)
                    .json("commandLine")
                    .omit_empty()
                    .platforms(WINDOWS),
            )?
            .declare(Field::new("Env", FieldKind::strings()).json("env").omit_empty())?
            .declare(Field::new("Cwd", FieldKind::STRING).json("cwd").required())?
            .declare(
                Field::new("Capabilities", FieldKind::object::<LinuxCapabilities>())
                    .json("capabilities")
                    .omit_empty()
                    .platforms(LINUX),
            )?
            .declare(
                Field::new("Rlimits", FieldKind::objects::<POSIXRlimit>())
                    .json("rlimits")
                    .omit_empty()
                    .platforms(POSIX),
            )?
            .declare(
                Field::new("NoNewPrivileges", FieldKind::BOOLEAN)
                    .json("noNewPrivileges")
                    .omit_empty()
                    .platforms(LINUX),
            )?
            .declare(
                Field::new("ApparmorProfile", FieldKind::STRING)
                    .json("apparmorProfile")
                    .omit_empty()
                    .platforms(LINUX),
            )?
            .declare(
                Field::new("OOMScoreAdj", FieldKind::INTEGER)
                    .json("oomScoreAdj")
                    .omit_empty()
                    .platforms(LINUX),
            )?
            .declare(
                Field::new("SelinuxLabel", FieldKind::STRING)
                    .json("selinuxLabel")
                    .omit_empty()
                    .platforms(LINUX),
            )?;
        Ok(())
    }
}

/// Console dimensions.
pub struct ConsoleBox;

impl Schema for ConsoleBox {
    const NAME: &'static str = "Box";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("Height", FieldKind::INTEGER).json("height").required())?
            .declare(Field::new("Width", FieldKind::INTEGER).json("width").required())?;
        Ok(())
    }
}

/// User and group the container process runs as.
pub struct User;

impl Schema for User {
    const NAME: &'static str = "User";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("UID", FieldKind::INTEGER).json("uid").platforms(POSIX))?
            .declare(Field::new("GID", FieldKind::INTEGER).json("gid").platforms(POSIX))?
            .declare(
                Field::new("Umask", FieldKind::INTEGER)
                    .json("umask")
                    .omit_empty()
                    .platforms(POSIX),
            )?
            .declare(
                Field::new("AdditionalGids", FieldKind::integers())
                    .json("additionalGids")
                    .omit_empty()
                    .platforms(POSIX),
            )?
            .declare(
                Field::new("Username", FieldKind::STRING)
                    .json("username")
                    .omit_empty()
                    .platforms(WINDOWS),
            )?;
        Ok(())
    }
}

/// Capability sets of the container process.
pub struct LinuxCapabilities;

impl Schema for LinuxCapabilities {
    const NAME: &'static str = "LinuxCapabilities";

    fn declare(object: &mut TypedObject) -> Result<()> {
        for (name, wire) in [
            ("Bounding", "bounding"),
            ("Effective", "effective"),
            ("Inheritable", "inheritable"),
            ("Permitted", "permitted"),
            ("Ambient", "ambient"),
        ] {
            object.declare(
                Field::new(name, FieldKind::strings())
                    .json(wire)
                    .omit_empty()
                    .platforms(LINUX),
            )?;
        }
        Ok(())
    }
}

/// A resource limit applied to the container process.
pub struct POSIXRlimit;

impl Schema for POSIXRlimit {
    const NAME: &'static str = "POSIXRlimit";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("Type", FieldKind::STRING).json("type").required())?
            .declare(Field::new("Hard", FieldKind::INTEGER).json("hard").required())?
            .declare(Field::new("Soft", FieldKind::INTEGER).json("soft").required())?;
        Ok(())
    }
}

/// The container's root filesystem.
pub struct Root;

impl Schema for Root {
    const NAME: &'static str = "Root";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("Path", FieldKind::STRING).json("path").required())?
            .declare(Field::new("Readonly", FieldKind::BOOLEAN).json("readonly").omit_empty())?;
        Ok(())
    }
}

/// A mount on top of the root filesystem.
pub struct Mount;

impl Schema for Mount {
    const NAME: &'static str = "Mount";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("Destination", FieldKind::STRING).json("destination").required())?
            .declare(
                Field::new("Type", FieldKind::STRING)
                    .json("type")
                    .omit_empty()
                    .platforms(POSIX),
            )?
            .declare(Field::new("Source", FieldKind::STRING).json("source").omit_empty())?
            .declare(Field::new("Options", FieldKind::strings()).json("options").omit_empty())?;
        Ok(())
    }
}

/// Lifecycle hooks, each a list of commands.
pub struct Hooks;

impl Schema for Hooks {
    const NAME: &'static str = "Hooks";

    fn declare(object: &mut TypedObject) -> Result<()> {
        for (name, wire) in [
            ("Prestart", "prestart"),
            ("CreateRuntime", "createRuntime"),
            ("CreateContainer", "createContainer"),
            ("StartContainer", "startContainer"),
            ("Poststart", "poststart"),
            ("Poststop", "poststop"),
        ] {
            object.declare(Field::new(name, FieldKind::objects::<Hook>()).json(wire).omit_empty())?;
        }
        Ok(())
    }
}

/// A command run at a lifecycle event.
pub struct Hook;

impl Schema for Hook {
    const NAME: &'static str = "Hook";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("Path", FieldKind::STRING).json("path").required())?
            .declare(Field::new("Args", FieldKind::strings()).json("args").omit_empty())?
            .declare(Field::new("Env", FieldKind::strings()).json("env").omit_empty())?
            .declare(Field::new("Timeout", FieldKind::INTEGER).json("timeout").omit_empty())?;
        Ok(())
    }
}
