//! Execution order and session grouping for the methods of one test class.
//!
//! Methods connected through `depends_on` edges form a group. A group shares
//! one browser session and one data reset; methods of different groups never
//! share state. Groups run one after another, each in a topological order of
//! its dependency edges.

use serde::Serialize;
use std::collections::{BTreeSet, HashMap, HashSet};

use crate::error::{Result, UiTestError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodState {
    NotInvoked,
    /// Ran; later members of its group still expect the session.
    GroupOpen,
    /// Ran, and nothing else in its group is pending.
    GroupFinished,
}

#[derive(Debug)]
struct Node<M> {
    method: M,
    name: String,
    depends_on: Vec<String>,
    group: usize,
    done: bool,
    state: MethodState,
}

#[derive(Debug)]
pub struct MethodsOrder<M> {
    /// Nodes in execution order.
    nodes: Vec<Node<M>>,
    position: HashMap<String, usize>,
}

impl<M> MethodsOrder<M> {
    /// Build the order for `methods`, failing on duplicate names, unknown
    /// prerequisites and dependency cycles.
    pub fn new<N, D>(methods: Vec<M>, name_of: N, depends_on: D) -> Result<Self>
    where
        N: Fn(&M) -> String,
        D: Fn(&M) -> Vec<String>,
    {
        let names: Vec<String> = methods.iter().map(&name_of).collect();
        let mut declared: HashMap<&str, usize> = HashMap::new();
        for (i, name) in names.iter().enumerate() {
            if declared.insert(name.as_str(), i).is_some() {
                return Err(UiTestError::Ordering(format!(
                    "method '{}' is declared more than once",
                    name
                )));
            }
        }

        let mut deps: Vec<Vec<usize>> = Vec::with_capacity(methods.len());
        for (i, method) in methods.iter().enumerate() {
            let mut seen = HashSet::new();
            let mut edges = Vec::new();
            for dep in depends_on(method) {
                let Some(&j) = declared.get(dep.as_str()) else {
                    return Err(UiTestError::Ordering(format!(
                        "method '{}' depends on unknown method '{}'",
                        names[i], dep
                    )));
                };
                if seen.insert(j) {
                    edges.push(j);
                }
            }
            deps.push(edges);
        }

        let groups = connected_groups(&deps);
        let order = topological_order(&deps, &groups, &names)?;

        let dep_names: Vec<Vec<String>> = deps
            .iter()
            .map(|edges| edges.iter().map(|&j| names[j].clone()).collect())
            .collect();

        let mut slots: Vec<Option<(M, String, Vec<String>)>> = methods
            .into_iter()
            .zip(names)
            .zip(dep_names)
            .map(|((m, n), d)| Some((m, n, d)))
            .collect();

        let mut nodes = Vec::with_capacity(order.len());
        let mut position = HashMap::new();
        for i in order {
            if let Some((method, name, depends_on)) = slots[i].take() {
                position.insert(name.clone(), nodes.len());
                nodes.push(Node {
                    method,
                    name,
                    depends_on,
                    group: groups[i],
                    done: false,
                    state: MethodState::NotInvoked,
                });
            }
        }

        Ok(Self { nodes, position })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Methods in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &M> {
        self.nodes.iter().map(|n| &n.method)
    }

    pub fn names(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&M> {
        self.node(name).map(|n| &n.method)
    }

    pub fn depends_on(&self, name: &str) -> &[String] {
        self.node(name).map(|n| n.depends_on.as_slice()).unwrap_or(&[])
    }

    pub fn group_of(&self, name: &str) -> Option<usize> {
        self.node(name).map(|n| n.group)
    }

    pub fn state(&self, name: &str) -> Option<MethodState> {
        self.node(name).map(|n| n.state)
    }

    /// True when another member of this method's group already ran, so its
    /// session and data must be reused instead of reset.
    ///
    /// Membership decides, not prerequisites: in `a`, `c`, `b(a, c)` the root
    /// `c` reports started once `a` ran, so it joins the session `b` needs.
    pub fn is_group_started(&self, name: &str) -> bool {
        let Some(node) = self.node(name) else {
            return false;
        };
        self.nodes
            .iter()
            .any(|n| n.group == node.group && n.name != node.name && n.done)
    }

    /// True when, once this method has run, no other member of its group is
    /// still pending.
    pub fn is_group_finished(&self, name: &str) -> bool {
        let Some(node) = self.node(name) else {
            return true;
        };
        self.nodes
            .iter()
            .filter(|n| n.group == node.group && n.name != node.name)
            .all(|n| n.done)
    }

    pub fn mark_as_invoked(&mut self, name: &str) {
        self.mark_done(name);
    }

    /// Skipped methods count as done for group bookkeeping.
    pub fn mark_as_skipped(&mut self, name: &str) {
        self.mark_done(name);
    }

    /// Every method that directly or transitively depends on `name`, in
    /// execution order.
    pub fn dependents_of(&self, name: &str) -> Vec<String> {
        let mut affected: HashSet<&str> = HashSet::new();
        affected.insert(name);
        let mut result = Vec::new();
        // Execution order is topological, so one forward pass suffices.
        for node in &self.nodes {
            if node
                .depends_on
                .iter()
                .any(|d| affected.contains(d.as_str()))
            {
                affected.insert(node.name.as_str());
                result.push(node.name.clone());
            }
        }
        result
    }

    fn mark_done(&mut self, name: &str) {
        let Some(&pos) = self.position.get(name) else {
            return;
        };
        self.nodes[pos].done = true;
        let group = self.nodes[pos].group;

        let finished = self
            .nodes
            .iter()
            .filter(|n| n.group == group)
            .all(|n| n.done);

        if finished {
            for node in self.nodes.iter_mut().filter(|n| n.group == group) {
                node.state = MethodState::GroupFinished;
            }
        } else {
            self.nodes[pos].state = MethodState::GroupOpen;
        }
    }

    fn node(&self, name: &str) -> Option<&Node<M>> {
        self.position.get(name).map(|&i| &self.nodes[i])
    }
}

/// Group id per method; ids are numbered by the first declared member.
fn connected_groups(deps: &[Vec<usize>]) -> Vec<usize> {
    let mut parent: Vec<usize> = (0..deps.len()).collect();

    fn find(parent: &mut [usize], mut i: usize) -> usize {
        while parent[i] != i {
            parent[i] = parent[parent[i]];
            i = parent[i];
        }
        i
    }

    for (i, edges) in deps.iter().enumerate() {
        for &j in edges {
            let (a, b) = (find(&mut parent, i), find(&mut parent, j));
            if a != b {
                // Keep the smaller index as root so ids follow declaration order.
                let (root, child) = if a < b { (a, b) } else { (b, a) };
                parent[child] = root;
            }
        }
    }

    let mut ids: HashMap<usize, usize> = HashMap::new();
    (0..deps.len())
        .map(|i| {
            let root = find(&mut parent, i);
            let next = ids.len();
            *ids.entry(root).or_insert(next)
        })
        .collect()
}

fn topological_order(deps: &[Vec<usize>], groups: &[usize], names: &[String]) -> Result<Vec<usize>> {
    let group_count = groups.iter().copied().max().map_or(0, |g| g + 1);
    let mut order = Vec::with_capacity(deps.len());

    let mut remaining: Vec<usize> = deps.iter().map(Vec::len).collect();
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); deps.len()];
    for (i, edges) in deps.iter().enumerate() {
        for &j in edges {
            dependents[j].push(i);
        }
    }

    for group in 0..group_count {
        let members: Vec<usize> = (0..deps.len()).filter(|&i| groups[i] == group).collect();
        let mut ready: BTreeSet<usize> = members
            .iter()
            .copied()
            .filter(|&i| remaining[i] == 0)
            .collect();
        let mut emitted = 0;

        while let Some(i) = ready.pop_first() {
            order.push(i);
            emitted += 1;
            for &d in &dependents[i] {
                remaining[d] -= 1;
                if remaining[d] == 0 {
                    ready.insert(d);
                }
            }
        }

        if emitted < members.len() {
            let stuck: Vec<&str> = members
                .iter()
                .filter(|&&i| remaining[i] > 0)
                .map(|&i| names[i].as_str())
                .collect();
            return Err(UiTestError::Ordering(format!(
                "dependency cycle among methods: {}",
                stuck.join(", ")
            )));
        }
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(decls: &[(&str, &[&str])]) -> Result<MethodsOrder<String>> {
        let methods: Vec<(String, Vec<String>)> = decls
            .iter()
            .map(|(n, d)| (n.to_string(), d.iter().map(|s| s.to_string()).collect()))
            .collect();
        let deps: HashMap<String, Vec<String>> = methods.iter().cloned().collect();
        MethodsOrder::new(
            methods.into_iter().map(|(n, _)| n).collect(),
            |m| m.clone(),
            move |m| deps.get(m).cloned().unwrap_or_default(),
        )
    }

    #[test]
    fn test_groups_numbered_by_first_member() {
        let deps = vec![vec![], vec![], vec![0], vec![1]];
        assert_eq!(connected_groups(&deps), vec![0, 1, 0, 1]);
    }

    #[test]
    fn test_diamond_keeps_declaration_tiebreak() {
        let o = order(&[
            ("d", &["b", "c"]),
            ("c", &["a"]),
            ("b", &["a"]),
            ("a", &[]),
        ])
        .unwrap();
        assert_eq!(o.names(), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_self_dependency_is_a_cycle() {
        let err = order(&[("a", &["a"])]).unwrap_err();
        assert!(err.to_string().contains("cycle"));
    }

    #[test]
    fn test_duplicate_dependency_counted_once() {
        let o = order(&[("a", &[]), ("b", &["a", "a"])]).unwrap();
        assert_eq!(o.depends_on("b"), ["a".to_string()]);
        assert_eq!(o.names(), vec!["a", "b"]);
    }
}
