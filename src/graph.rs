//! Ordered, append-only SKG-IF node collection
//!
//! Nodes keep first-seen order. Agents are indexed by `local_identifier`
//! so that an agent contributing to several records (or in several roles)
//! is emitted once.

use std::collections::HashMap;

use tracing::debug;

use crate::model::{Agent, Node, ResearchProduct, Venue};

#[derive(Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    /// local_identifier -> position of the agent in `nodes`
    agents: HashMap<String, usize>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_product(&mut self, product: ResearchProduct) {
        self.nodes.push(Node::Product(product));
    }

    pub fn push_venue(&mut self, venue: Venue) {
        self.nodes.push(Node::Venue(venue));
    }

    /// Insert an agent unless one with the same `local_identifier` exists
    ///
    /// Returns true if the agent was inserted.
    pub fn insert_agent(&mut self, agent: Agent) -> bool {
        if let Some(existing) = self.agent(&agent.local_identifier) {
            if existing != &agent {
                debug!(
                    local_identifier = %agent.local_identifier,
                    "Agent already present with a different shape, keeping first"
                );
            }
            return false;
        }

        self.agents.insert(agent.local_identifier.clone(), self.nodes.len());
        self.nodes.push(Node::Agent(agent));
        true
    }

    pub fn agent(&self, local_identifier: &str) -> Option<&Agent> {
        match self.agents.get(local_identifier).map(|&pos| &self.nodes[pos]) {
            Some(Node::Agent(agent)) => Some(agent),
            _ => None,
        }
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}
