//! Radix trie node model.
//!
//! Each node is one position in the path hierarchy. Literal children are
//! keyed by their exact segment string; parameter children are keyed by their
//! declared [`ParamType`], so a node has at most one child lineage per type.
//! The catch-all child, if any, lives under [`ParamType::Path`].
//!
//! Children are owned by their parent. Nodes are created on demand during
//! registration and never removed.

use bitflags::bitflags;
use routrie_core::{Endpoint, ParamDef, ParamType, Resolve, Scope};
use std::collections::{BTreeMap, HashMap};

bitflags! {
    /// Markers on a trie node.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub(crate) struct NodeFlags: u8 {
        /// The node is the root of a mounted sub-application.
        const MOUNT = 1;
        /// The node has a generic handler that serves every scope.
        const GENERIC = 1 << 1;
    }
}

bitflags! {
    /// A set of [`ParamType`]s.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ParamTypes: u16 {
        /// [`ParamType::Str`]
        const STR = 1;
        /// [`ParamType::Int`]
        const INT = 1 << 1;
        /// [`ParamType::Float`]
        const FLOAT = 1 << 2;
        /// [`ParamType::Decimal`]
        const DECIMAL = 1 << 3;
        /// [`ParamType::Uuid`]
        const UUID = 1 << 4;
        /// [`ParamType::Date`]
        const DATE = 1 << 5;
        /// [`ParamType::DateTime`]
        const DATETIME = 1 << 6;
        /// [`ParamType::Time`]
        const TIME = 1 << 7;
        /// [`ParamType::Path`]
        const PATH = 1 << 8;

        /// Types whose values always contain at least one digit.
        const NEEDS_DIGIT = Self::INT.bits()
            | Self::FLOAT.bits()
            | Self::DECIMAL.bits()
            | Self::DATE.bits()
            | Self::DATETIME.bits()
            | Self::TIME.bits();
    }
}

impl ParamTypes {
    /// A superset of the types that could accept `segment`.
    ///
    /// Computed from a single byte scan, so a node can skip validating its
    /// parameter children when none of their types can possibly match.
    pub fn plausible_for(segment: &str) -> Self {
        let mut set = ParamTypes::STR | ParamTypes::PATH;
        if segment.bytes().any(|b| b.is_ascii_digit()) {
            set |= ParamTypes::NEEDS_DIGIT;
        }
        // simple, hyphenated, braced and urn forms
        if matches!(segment.len(), 32 | 36 | 38 | 45) {
            set |= ParamTypes::UUID;
        }
        set
    }
}

impl From<ParamType> for ParamTypes {
    fn from(kind: ParamType) -> Self {
        match kind {
            ParamType::Str => ParamTypes::STR,
            ParamType::Int => ParamTypes::INT,
            ParamType::Float => ParamTypes::FLOAT,
            ParamType::Decimal => ParamTypes::DECIMAL,
            ParamType::Uuid => ParamTypes::UUID,
            ParamType::Date => ParamTypes::DATE,
            ParamType::DateTime => ParamTypes::DATETIME,
            ParamType::Time => ParamTypes::TIME,
            ParamType::Path => ParamTypes::PATH,
        }
    }
}

/// A node in the route trie.
pub(crate) struct TrieNode<H> {
    /// Endpoints stored at this node, one per scope.
    pub(crate) handlers: BTreeMap<Scope, Endpoint<H>>,
    /// Literal children, keyed by exact segment.
    pub(crate) statics: HashMap<Box<str>, TrieNode<H>>,
    /// Parameter children (catch-all included), keyed by declared type.
    pub(crate) dynamics: HashMap<ParamType, TrieNode<H>>,
    /// Definitions of the parameter children, in registration order.
    pub(crate) child_params: Vec<ParamDef>,
    /// The distinct types in `child_params`.
    pub(crate) child_param_types: ParamTypes,
    /// The catch-all child's definition.
    pub(crate) catch_all: Option<ParamDef>,
    /// Every parameter name declared for the children, with its type.
    pub(crate) param_names: HashMap<Box<str>, ParamType>,
    pub(crate) flags: NodeFlags,
    /// The mounted sub-application, set together with `NodeFlags::MOUNT`.
    pub(crate) mount: Option<Box<dyn Resolve<H>>>,
}

impl<H> Default for TrieNode<H> {
    fn default() -> Self {
        Self {
            handlers: BTreeMap::new(),
            statics: HashMap::new(),
            dynamics: HashMap::new(),
            child_params: Vec::new(),
            child_param_types: ParamTypes::empty(),
            catch_all: None,
            param_names: HashMap::new(),
            flags: NodeFlags::empty(),
            mount: None,
        }
    }
}

impl<H> TrieNode<H> {
    pub(crate) fn is_mount(&self) -> bool {
        self.flags.contains(NodeFlags::MOUNT)
    }

    pub(crate) fn is_generic(&self) -> bool {
        self.flags.contains(NodeFlags::GENERIC)
    }

    /// The mounted resolver, if this node is a mount.
    pub(crate) fn mounted(&self) -> Option<&dyn Resolve<H>> {
        if self.is_mount() {
            self.mount.as_deref()
        } else {
            None
        }
    }

    /// Returns true if nothing has been attached at or below this node.
    pub(crate) fn is_vacant(&self) -> bool {
        self.handlers.is_empty()
            && self.statics.is_empty()
            && self.dynamics.is_empty()
            && self.flags.is_empty()
    }

    /// The first parameter child, in registration order, whose type accepts
    /// `segment`.
    pub(crate) fn match_param(&self, segment: &str) -> Option<&TrieNode<H>> {
        if !self
            .child_param_types
            .intersects(ParamTypes::plausible_for(segment))
        {
            return None;
        }
        self.child_params
            .iter()
            .find(|def| def.kind().accepts(segment))
            .and_then(|def| self.dynamics.get(&def.kind()))
    }

    /// The catch-all child, if one is registered.
    pub(crate) fn catch_all_child(&self) -> Option<&TrieNode<H>> {
        self.catch_all
            .as_ref()
            .and_then(|_| self.dynamics.get(&ParamType::Path))
    }
}
