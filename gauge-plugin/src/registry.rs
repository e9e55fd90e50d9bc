//! Plugin Registry

use crate::{EvalContext, FunctionMeta, FunctionPlugin};
use gauge_core::{GaugeError, Value};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

/// Central plugin registry
///
/// Names are matched case-insensitively with underscores ignored, so
/// `to_camel_case`, `toCamelCase` and `TO_CAMEL_CASE` are the same key.
pub struct PluginRegistry {
    functions: HashMap<String, Arc<dyn FunctionPlugin>>,
    aliases: HashMap<String, String>,
}

/// Lookup key for a function or alias name.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    pub fn with_function<F: FunctionPlugin + 'static>(mut self, f: F) -> Self {
        let name = normalize(f.meta().name);
        self.functions.insert(name, Arc::new(f));
        self
    }

    /// Register `alias` as another name for the already registered `target`.
    pub fn with_alias(mut self, alias: &str, target: &str) -> Self {
        self.aliases.insert(normalize(alias), normalize(target));
        self
    }

    pub fn get_function(&self, name: &str) -> Option<&dyn FunctionPlugin> {
        let key = normalize(name);
        if let Some(f) = self.functions.get(&key) {
            return Some(f.as_ref());
        }
        self.aliases
            .get(&key)
            .and_then(|target| self.functions.get(target))
            .map(|f| f.as_ref())
    }

    /// Number of registered functions (aliases excluded)
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn call_function(&self, name: &str, args: &[Value], ctx: &EvalContext) -> Value {
        match self.get_function(name) {
            Some(f) => {
                tracing::debug!(function = name, args = args.len(), "calling function");
                f.call(args, ctx)
            }
            None => {
                tracing::warn!(function = name, "unknown function");
                let similar = self.find_similar_functions(name);
                let mut err = GaugeError::undefined_func(name);
                if !similar.is_empty() {
                    let suggestions: Vec<&str> = similar.iter().take(5).map(|s| s.as_str()).collect();
                    err = err.with_suggestion(format!(
                        "Similar: {}. Use list_functions() for full list.",
                        suggestions.join(", ")
                    ));
                }
                Value::Error(err)
            }
        }
    }

    /// Find function names similar to the given name (for error suggestions)
    fn find_similar_functions(&self, name: &str) -> Vec<String> {
        let query = normalize(name);
        let mut matches: Vec<(&'static str, usize)> = self.functions.iter()
            .filter_map(|(key, f)| {
                let score = Self::similarity_score(&query, key);
                if score > 0 {
                    Some((f.meta().name, score))
                } else {
                    None
                }
            })
            .collect();

        // Higher score first, then name for a stable order
        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        matches.into_iter().map(|(name, _)| name.to_string()).collect()
    }

    /// Calculate similarity score between two normalized names
    fn similarity_score(query: &str, candidate: &str) -> usize {
        let mut score = 0;

        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        let query_chars: HashSet<char> = query.chars().collect();
        let candidate_chars: HashSet<char> = candidate.chars().collect();
        let common = query_chars.intersection(&candidate_chars).count();
        // Sharing a handful of letters is noise, not similarity
        if common * 2 >= query_chars.len().max(1) + 2 {
            score += common * 2;
        }

        let len_diff = query.len().abs_diff(candidate.len());
        if len_diff < 5 && score > 0 {
            score += 5 - len_diff;
        }

        score
    }

    pub fn help(&self, name: Option<&str>) -> Value {
        match name {
            Some(n) => self.help_for(n),
            None => self.general_help(),
        }
    }

    fn help_for(&self, name: &str) -> Value {
        match self.get_function(name) {
            Some(f) => Value::Object(Self::function_to_help(f.meta())),
            None => Value::Error(GaugeError::new(
                gauge_core::codes::NOT_FOUND,
                format!("No function named '{}'", name),
            )),
        }
    }

    fn general_help(&self) -> Value {
        let mut by_category: BTreeMap<&'static str, Vec<&'static str>> = BTreeMap::new();
        for f in self.functions.values() {
            let meta = f.meta();
            by_category.entry(meta.category).or_default().push(meta.name);
        }

        let functions = by_category.into_iter()
            .map(|(category, mut names)| {
                names.sort_unstable();
                let list = names.into_iter().map(Value::from).collect();
                (category.to_string(), Value::List(list))
            })
            .collect();

        let mut help = HashMap::new();
        help.insert("functions".to_string(), Value::Object(functions));
        help.insert("usage".to_string(),
            Value::from("Call help('function_name') for detailed help."));
        Value::Object(help)
    }

    fn function_to_help(meta: FunctionMeta) -> HashMap<String, Value> {
        let mut help = HashMap::new();
        help.insert("name".to_string(), Value::from(meta.name));
        help.insert("description".to_string(), Value::from(meta.description));
        help.insert("usage".to_string(), Value::from(meta.usage));
        help.insert("returns".to_string(), Value::from(meta.returns));
        help.insert("category".to_string(), Value::from(meta.category));
        help.insert("args".to_string(), Value::List(
            meta.args.iter().map(|a| {
                let mut arg = HashMap::new();
                arg.insert("name".to_string(), Value::from(a.name));
                arg.insert("type".to_string(), Value::from(a.typ));
                arg.insert("description".to_string(), Value::from(a.description));
                arg.insert("optional".to_string(), Value::Bool(a.optional));
                if let Some(default) = a.default {
                    arg.insert("default".to_string(), Value::from(default));
                }
                Value::Object(arg)
            }).collect()
        ));
        help.insert("examples".to_string(), Value::List(
            meta.examples.iter().map(|e| Value::from(*e)).collect()
        ));
        help.insert("related".to_string(), Value::List(
            meta.related.iter().map(|r| Value::from(*r)).collect()
        ));
        help
    }

    /// List functions, optionally restricted to one category, sorted by name
    pub fn list_functions(&self, category: Option<&str>) -> Value {
        let mut metas: Vec<FunctionMeta> = self.functions.values()
            .map(|f| f.meta())
            .filter(|meta| category.map_or(true, |c| meta.category == c))
            .collect();
        metas.sort_by_key(|meta| meta.name);

        let funcs = metas.into_iter()
            .map(|meta| {
                let mut obj = HashMap::new();
                obj.insert("name".to_string(), Value::from(meta.name));
                obj.insert("description".to_string(), Value::from(meta.description));
                obj.insert("usage".to_string(), Value::from(meta.usage));
                obj.insert("category".to_string(), Value::from(meta.category));
                Value::Object(obj)
            })
            .collect();
        Value::List(funcs)
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
