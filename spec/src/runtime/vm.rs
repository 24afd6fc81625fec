//! Configuration for virtual-machine-based containers.

use ocispec_core::{Field, FieldKind, Result, Schema, TypedObject};

pub struct VM;

impl Schema for VM {
    const NAME: &'static str = "VM";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(
                Field::new("Hypervisor", FieldKind::object::<VMHypervisor>())
                    .json("hypervisor")
                    .omit_empty(),
            )?
            .declare(Field::new("Kernel", FieldKind::object::<VMKernel>()).json("kernel").required())?
            .declare(Field::new("Image", FieldKind::object::<VMImage>()).json("image").omit_empty())?;
        Ok(())
    }
}

pub struct VMHypervisor;

impl Schema for VMHypervisor {
    const NAME: &'static str = "VMHypervisor";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("Path", FieldKind::STRING).json("path").required())?
            .declare(Field::new("Parameters", FieldKind::strings()).json("parameters").omit_empty())?;
        Ok(())
    }
}

pub struct VMKernel;

impl Schema for VMKernel {
    const NAME: &'static str = "VMKernel";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("Path", FieldKind::STRING).json("path").required())?
            .declare(Field::new("Parameters", FieldKind::strings()).json("parameters").omit_empty())?
            .declare(Field::new("InitRD", FieldKind::STRING).json("initrd").omit_empty())?;
        Ok(())
    }
}

/// Root image the VM kernel boots into.
pub struct VMImage;

impl Schema for VMImage {
    const NAME: &'static str = "VMImage";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("Path", FieldKind::STRING).json("path").required())?
            // qcow2, raw, vhd, ...
            .declare(Field::new("Format", FieldKind::STRING).json("format").required())?;
        Ok(())
    }
}
