//! Solaris application container configuration.

use ocispec_core::{Field, FieldKind, Result, Schema, TypedObject};

pub struct Solaris;

impl Schema for Solaris {
    const NAME: &'static str = "Solaris";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            // SMF FMRI that must be online before the container process starts.
            .declare(Field::new("Milestone", FieldKind::STRING).json("milestone").omit_empty())?
            .declare(Field::new("LimitPriv", FieldKind::STRING).json("limitpriv").omit_empty())?
            .declare(Field::new("MaxShmMemory", FieldKind::STRING).json("maxShmMemory").omit_empty())?
            .declare(
                Field::new("Anet", FieldKind::objects::<SolarisAnet>())
                    .json("anet")
                    .omit_empty(),
            )?
            .declare(
                Field::new("CappedCPU", FieldKind::object::<SolarisCappedCPU>())
                    .json("cappedCPU")
                    .omit_empty(),
            )?
            .declare(
                Field::new("CappedMemory", FieldKind::object::<SolarisCappedMemory>())
                    .json("cappedMemory")
                    .omit_empty(),
            )?;
        Ok(())
    }
}

/// Automatically created network resources.
pub struct SolarisAnet;

impl Schema for SolarisAnet {
    const NAME: &'static str = "SolarisAnet";

    fn declare(object: &mut TypedObject) -> Result<()> {
        for (name, wire) in [
            ("Linkname", "linkname"),
            ("Lowerlink", "lowerLink"),
            ("Allowedaddr", "allowedAddress"),
            ("Configallowedaddr", "configureAllowedAddress"),
            ("Defrouter", "defrouter"),
            ("Linkprotection", "linkProtection"),
            ("Macaddress", "macAddress"),
        ] {
            object.declare(Field::new(name, FieldKind::STRING).json(wire).omit_empty())?;
        }
        Ok(())
    }
}

pub struct SolarisCappedCPU;

impl Schema for SolarisCappedCPU {
    const NAME: &'static str = "SolarisCappedCPU";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object.declare(Field::new("Ncpus", FieldKind::STRING).json("ncpus").omit_empty())?;
        Ok(())
    }
}

pub struct SolarisCappedMemory;

impl Schema for SolarisCappedMemory {
    const NAME: &'static str = "SolarisCappedMemory";

    fn declare(object: &mut TypedObject) -> Result<()> {
        object
            .declare(Field::new("Physical", FieldKind::STRING).json("physical").omit_empty())?
            .declare(Field::new("Swap", FieldKind::STRING).json("swap").omit_empty())?;
        Ok(())
    }
}
