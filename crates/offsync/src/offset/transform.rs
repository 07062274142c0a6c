//! Flattening of dumper documents into a single name -> offset map
//!
//! Precedence is offsets document < client document < manual overrides;
//! each layer overwrites same-named entries of the previous one.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use super::document::{ClientDocument, OffsetsDocument};
use crate::error::{Error, Result};

/// Flat name -> offset map, iterated in name order
pub type OffsetMap = BTreeMap<String, i64>;

/// Module every manual override is looked up in
const CLIENT_MODULE: &str = "client.dll";

/// Exact key path into one of the dumper documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupPath {
    Offsets {
        module: &'static str,
        symbol: &'static str,
    },
    Field {
        module: &'static str,
        class: &'static str,
        field: &'static str,
    },
}

impl LookupPath {
    pub fn resolve(&self, offsets: &OffsetsDocument, client: &ClientDocument) -> Result<i64> {
        let value = match *self {
            LookupPath::Offsets { module, symbol } => offsets.symbol(module, symbol),
            LookupPath::Field {
                module,
                class,
                field,
            } => client.field(module, class, field),
        };
        value.ok_or_else(|| Error::MissingKey {
            path: self.to_string(),
        })
    }
}

impl fmt::Display for LookupPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupPath::Offsets { module, symbol } => write!(f, "{module}/{symbol}"),
            LookupPath::Field {
                module,
                class,
                field,
            } => write!(f, "{module}/classes/{class}/fields/{field}"),
        }
    }
}

/// Named lookup that always wins over the flattened value
#[derive(Debug, Clone, Copy)]
pub struct ManualOverride {
    pub name: &'static str,
    pub path: LookupPath,
}

const fn global(name: &'static str) -> ManualOverride {
    ManualOverride {
        name,
        path: LookupPath::Offsets {
            module: CLIENT_MODULE,
            symbol: name,
        },
    }
}

const fn field(class: &'static str, name: &'static str) -> ManualOverride {
    ManualOverride {
        name,
        path: LookupPath::Field {
            module: CLIENT_MODULE,
            class,
            field: name,
        },
    }
}

pub const MANUAL_OVERRIDES: [ManualOverride; 12] = [
    global("dwEntityList"),
    global("dwViewMatrix"),
    global("dwLocalPlayerPawn"),
    field("C_BaseEntity", "m_iTeamNum"),
    field("C_BaseEntity", "m_lifeState"),
    field("C_BaseEntity", "m_pGameSceneNode"),
    field("CGameSceneNode", "m_vecAbsOrigin"),
    field("CCSPlayerController", "m_hPlayerPawn"),
    field("C_CSPlayerPawnBase", "m_pClippingWeapon"),
    field("C_EconEntity", "m_AttributeManager"),
    field("C_AttributeContainer", "m_Item"),
    field("C_EconItemView", "m_iItemDefinitionIndex"),
];

/// Renames one class field and shifts its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenameRule {
    pub class: &'static str,
    pub field: &'static str,
    pub new_name: &'static str,
    pub adjust: i64,
}

/// The bone array sits 128 bytes past the skeleton's model state
pub const BONE_ARRAY_RULE: RenameRule = RenameRule {
    class: "CSkeletonInstance",
    field: "m_modelState",
    new_name: "m_pBoneArray",
    adjust: 128,
};

impl RenameRule {
    /// Returns the emitted name and value for a class field
    pub fn apply<'a>(&self, class: &str, field: &'a str, value: i64) -> Result<(&'a str, i64)> {
        if class != self.class || field != self.field {
            return Ok((field, value));
        }
        let adjusted = value
            .checked_add(self.adjust)
            .ok_or_else(|| Error::OffsetOverflow {
                class: class.to_string(),
                field: field.to_string(),
                value,
            })?;
        Ok((self.new_name, adjusted))
    }
}

/// Resolve every manual override; the first missing key aborts
pub fn resolve_overrides(offsets: &OffsetsDocument, client: &ClientDocument) -> Result<OffsetMap> {
    MANUAL_OVERRIDES
        .iter()
        .map(|o| {
            o.path
                .resolve(offsets, client)
                .map(|value| (o.name.to_string(), value))
        })
        .collect()
}

/// Copy every module symbol into `out`, later modules overwriting earlier ones
pub fn flatten_offsets(offsets: &OffsetsDocument, out: &mut OffsetMap) {
    for symbols in offsets.modules.values() {
        for (name, value) in symbols {
            out.insert(name.clone(), *value);
        }
    }
}

/// Copy every class field into `out`, applying the bone array rename
pub fn flatten_client(client: &ClientDocument, out: &mut OffsetMap) -> Result<()> {
    let classes = client
        .modules
        .values()
        .filter_map(|module| module.classes.as_ref())
        .flatten();

    for (class_name, class) in classes {
        let Some(fields) = &class.fields else {
            continue;
        };
        for (field_name, value) in fields {
            let (name, value) = BONE_ARRAY_RULE.apply(class_name, field_name, *value)?;
            out.insert(name.to_string(), value);
        }
    }
    Ok(())
}

/// Build the merged map emitted as constants
pub fn build_offset_map(offsets: &OffsetsDocument, client: &ClientDocument) -> Result<OffsetMap> {
    let overrides = resolve_overrides(offsets, client)?;

    let mut all = OffsetMap::new();
    flatten_offsets(offsets, &mut all);
    let from_offsets = all.len();
    flatten_client(client, &mut all)?;
    debug!(
        "Flattened {} offsets and {} client fields",
        from_offsets,
        all.len() - from_offsets
    );

    all.extend(overrides);
    Ok(all)
}
