//! Route insertion.
//!
//! Registration walks the pattern one segment at a time from the root,
//! creating edges on demand, and attaches the endpoint (or the mounted
//! resolver) to the terminal node. All structural checks happen here, so a
//! trie that finished building is always consistent.

use crate::node::{NodeFlags, ParamTypes, TrieNode};
use routrie_core::{
    BuildError, Endpoint, ParamDef, ParamType, PathPattern, PatternError, Resolve, Scope, Segment,
};

impl<H> TrieNode<H> {
    /// Insert an endpoint for `pattern`.
    pub(crate) fn insert(
        &mut self,
        pattern: &PathPattern,
        endpoint: Endpoint<H>,
    ) -> Result<(), BuildError> {
        let node = self.walk_mut(pattern)?;
        if node.is_mount() {
            return Err(BuildError::invalid(
                pattern.as_str(),
                PatternError::ShadowedByMount(pattern.as_str().to_string()),
            ));
        }

        let scope = endpoint.scope();
        if node.handlers.contains_key(&scope) {
            return Err(BuildError::RouteConflict {
                pattern: pattern.as_str().to_string(),
                scope,
            });
        }
        if scope == Scope::Generic {
            node.flags.insert(NodeFlags::GENERIC);
        }
        node.handlers.insert(scope, endpoint);
        Ok(())
    }

    /// Mount a sub-application at a literal-only `pattern`.
    pub(crate) fn insert_mount(
        &mut self,
        pattern: &PathPattern,
        app: Box<dyn Resolve<H>>,
    ) -> Result<(), BuildError> {
        if !pattern.is_static() {
            return Err(BuildError::invalid(
                pattern.as_str(),
                PatternError::ParameterInMount,
            ));
        }

        let node = self.walk_mut(pattern)?;
        if node.is_mount() {
            return Err(BuildError::invalid(
                pattern.as_str(),
                PatternError::DuplicateMount,
            ));
        }
        if !node.is_vacant() {
            return Err(BuildError::invalid(
                pattern.as_str(),
                PatternError::MountOverRoutes,
            ));
        }
        node.flags.insert(NodeFlags::MOUNT);
        node.mount = Some(app);
        Ok(())
    }

    /// Walk to the node for `pattern`, creating missing edges.
    ///
    /// Fails if the walk passes through a mount: everything below a mount
    /// belongs to the mounted application.
    fn walk_mut(&mut self, pattern: &PathPattern) -> Result<&mut TrieNode<H>, BuildError> {
        let mut node = self;
        for (depth, segment) in pattern.segments().iter().enumerate() {
            if node.is_mount() {
                let prefix = mount_prefix(&pattern.segments()[..depth]);
                return Err(BuildError::invalid(
                    pattern.as_str(),
                    PatternError::ShadowedByMount(prefix),
                ));
            }
            node = node
                .child_or_insert(segment)
                .map_err(|err| BuildError::invalid(pattern.as_str(), err))?;
        }
        Ok(node)
    }

    fn child_or_insert(&mut self, segment: &Segment) -> Result<&mut TrieNode<H>, PatternError> {
        match segment {
            Segment::Literal(literal) => {
                if !self.statics.contains_key(&**literal) {
                    self.ensure_open(segment)?;
                }
                Ok(self.statics.entry(literal.clone()).or_default())
            }
            Segment::Param(def) => {
                self.record_param(def, segment)?;
                Ok(self.dynamics.entry(def.kind()).or_default())
            }
            Segment::CatchAll(def) => {
                self.record_catch_all(def)?;
                Ok(self.dynamics.entry(ParamType::Path).or_default())
            }
        }
    }

    /// New edges may not be added once a catch-all is registered here.
    fn ensure_open(&self, segment: &Segment) -> Result<(), PatternError> {
        match self.catch_all {
            Some(_) => Err(PatternError::ChildAfterCatchAll(segment.to_string())),
            None => Ok(()),
        }
    }

    /// Record a parameter child's definition on this (the parent) node.
    fn record_param(&mut self, def: &ParamDef, segment: &Segment) -> Result<(), PatternError> {
        self.check_name(def)?;
        let kind = ParamTypes::from(def.kind());
        if !self.child_param_types.contains(kind) {
            self.ensure_open(segment)?;
            self.child_params.push(def.clone());
            self.child_param_types |= kind;
        }
        self.param_names.insert(def.name().into(), def.kind());
        Ok(())
    }

    fn record_catch_all(&mut self, def: &ParamDef) -> Result<(), PatternError> {
        if let Some(existing) = &self.catch_all {
            if existing.name() != def.name() {
                return Err(PatternError::ConflictingCatchAll {
                    existing: existing.name().to_string(),
                    requested: def.name().to_string(),
                });
            }
            return Ok(());
        }
        self.check_name(def)?;
        self.catch_all = Some(def.clone());
        self.param_names.insert(def.name().into(), def.kind());
        Ok(())
    }

    /// A name keeps the type it was first declared with at this position,
    /// whichever edge it was declared on.
    fn check_name(&self, def: &ParamDef) -> Result<(), PatternError> {
        match self.param_names.get(def.name()) {
            Some(&existing) if existing != def.kind() => {
                Err(PatternError::ConflictingParameterType {
                    name: def.name().to_string(),
                    existing: existing.to_string(),
                    requested: def.kind().to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}

fn mount_prefix(segments: &[Segment]) -> String {
    let mut prefix = String::new();
    for segment in segments {
        prefix.push('/');
        prefix.push_str(&segment.to_string());
    }
    if prefix.is_empty() {
        prefix.push('/');
    }
    prefix
}

#[cfg(test)]
mod tests {
    use super::*;
    use routrie_core::Method;

    fn insert(
        root: &mut TrieNode<&'static str>,
        pattern: &str,
        scope: Scope,
    ) -> Result<(), BuildError> {
        let parsed = PathPattern::parse(pattern).unwrap();
        let endpoint = Endpoint::new(&parsed, scope, "handler");
        root.insert(&parsed, endpoint)
    }

    #[test]
    fn test_literal_edges_are_shared() {
        let mut root = TrieNode::default();
        insert(&mut root, "/users/active", Scope::GET).unwrap();
        insert(&mut root, "/users/banned", Scope::GET).unwrap();

        assert_eq!(root.statics.len(), 1);
        let users = &root.statics["users"];
        assert_eq!(users.statics.len(), 2);
        assert!(users.handlers.is_empty());
        assert!(users.statics["active"].handlers.contains_key(&Scope::GET));
    }

    #[test]
    fn test_param_definitions_live_on_parent() {
        let mut root = TrieNode::default();
        insert(&mut root, "/items/{id:int}", Scope::GET).unwrap();
        insert(&mut root, "/items/{slug}", Scope::GET).unwrap();
        insert(&mut root, "/items/{other:int}/parts", Scope::GET).unwrap();

        let items = &root.statics["items"];
        let kinds: Vec<_> = items.child_params.iter().map(ParamDef::kind).collect();
        assert_eq!(kinds, vec![ParamType::Int, ParamType::Str]);
        assert_eq!(items.child_param_types, ParamTypes::INT | ParamTypes::STR);
        assert_eq!(items.dynamics.len(), 2);
        assert!(items.dynamics[&ParamType::Int].statics.contains_key("parts"));
    }

    #[test]
    fn test_same_scope_twice_conflicts() {
        let mut root = TrieNode::default();
        insert(&mut root, "/items/{id:int}", Scope::GET).unwrap();
        insert(&mut root, "/items/{id:int}", Scope::POST).unwrap();

        let err = insert(&mut root, "/items/{key:int}/", Scope::GET).unwrap_err();
        assert_eq!(
            err,
            BuildError::RouteConflict {
                pattern: "/items/{key:int}".to_string(),
                scope: Scope::GET,
            }
        );
    }

    #[test]
    fn test_conflicting_parameter_type() {
        let mut root = TrieNode::default();
        insert(&mut root, "/items/{id:int}", Scope::GET).unwrap();
        let err = insert(&mut root, "/items/{id:uuid}", Scope::GET).unwrap_err();
        assert_eq!(
            err.pattern_error(),
            Some(&PatternError::ConflictingParameterType {
                name: "id".to_string(),
                existing: "int".to_string(),
                requested: "uuid".to_string(),
            })
        );
    }

    #[test]
    fn test_catch_all_is_last_child() {
        let mut root = TrieNode::default();
        insert(&mut root, "/files/index", Scope::GET).unwrap();
        insert(&mut root, "/files/{rest:path}", Scope::GET).unwrap();
        insert(&mut root, "/files/{rest:path}", Scope::POST).unwrap();
        // existing edges stay usable
        insert(&mut root, "/files/index", Scope::POST).unwrap();

        let err = insert(&mut root, "/files/other", Scope::GET).unwrap_err();
        assert_eq!(
            err.pattern_error(),
            Some(&PatternError::ChildAfterCatchAll("other".to_string()))
        );
        let err = insert(&mut root, "/files/{id:int}", Scope::GET).unwrap_err();
        assert_eq!(
            err.pattern_error(),
            Some(&PatternError::ChildAfterCatchAll("{id:int}".to_string()))
        );
        let err = insert(&mut root, "/files/{tail:path}", Scope::Http(Method::Put)).unwrap_err();
        assert!(matches!(
            err.pattern_error(),
            Some(PatternError::ConflictingCatchAll { .. })
        ));
    }

    #[test]
    fn test_name_remembered_across_shared_edge() {
        let mut root = TrieNode::default();
        insert(&mut root, "/x/{a:int}", Scope::GET).unwrap();
        insert(&mut root, "/x/{b:int}/y", Scope::GET).unwrap();

        let x = &root.statics["x"];
        assert_eq!(x.child_params.len(), 1);
        assert_eq!(x.param_names.get("b"), Some(&ParamType::Int));

        let err = insert(&mut root, "/x/{b:str}/z", Scope::GET).unwrap_err();
        assert_eq!(
            err.pattern_error(),
            Some(&PatternError::ConflictingParameterType {
                name: "b".to_string(),
                existing: "int".to_string(),
                requested: "str".to_string(),
            })
        );
        // a rejected declaration leaves no new edge behind
        assert!(!root.statics["x"].dynamics.contains_key(&ParamType::Str));
    }

    #[test]
    fn test_catch_all_name_clashes_with_param() {
        let mut root = TrieNode::default();
        insert(&mut root, "/files/{name}", Scope::GET).unwrap();
        let err = insert(&mut root, "/files/{name:path}", Scope::POST).unwrap_err();
        assert_eq!(
            err.pattern_error(),
            Some(&PatternError::ConflictingParameterType {
                name: "name".to_string(),
                existing: "str".to_string(),
                requested: "path".to_string(),
            })
        );
    }
}
