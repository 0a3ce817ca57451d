//! # Selection State Machine
//!
//! Two states: `IDLE` (nothing selected) and `SELECTED(name, node)`. A pick
//! either selects the picked node or, when it hits the current selection
//! again, deselects it.
//!
//! Transitions are pure: [`SelectionState::on_pick`] takes the current state
//! and the pick, and returns the next state plus the side effects the caller
//! has to carry out. Nothing here touches the scene.

use crate::gfx::scene::NodeId;

use super::config::SelectionIdentity;

/// Current and previous selection
///
/// `previous_node` is the node whose highlight has to be reversed when the
/// selection moves elsewhere. It holds at most one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub current_name: Option<String>,
    pub current_node: Option<NodeId>,
    pub previous_node: Option<NodeId>,
}

/// Effect of a pick on the selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    /// The pick hit the current selection; the machine is `IDLE` now
    Deselected { name: String },
    /// `name` is the new selection
    Selected { name: String, node: NodeId },
}

/// Outcome of one pick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SelectionState,
    /// Node whose original appearance must be restored before highlighting
    pub restore: Option<NodeId>,
    pub change: SelectionChange,
}

impl SelectionState {
    /// The `IDLE` state
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.current_name.is_none()
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.current_name.as_deref()
    }

    /// True when a pick on (`node`, `name`) hits the current selection
    pub fn is_reselect(&self, node: NodeId, name: &str, identity: SelectionIdentity) -> bool {
        match identity {
            SelectionIdentity::DisplayName => self.current_name.as_deref() == Some(name),
            SelectionIdentity::Node => self.current_node == Some(node),
        }
    }

    /// Computes the transition for a pick on `node`, displayed as `name`
    ///
    /// The previous node is restored whenever it differs from the picked
    /// node, regardless of whether the pick selects or deselects.
    pub fn on_pick(&self, node: NodeId, name: &str, identity: SelectionIdentity) -> Transition {
        let restore = self.previous_node.filter(|previous| *previous != node);

        if self.is_reselect(node, name, identity) {
            Transition {
                state: Self::idle(),
                restore,
                change: SelectionChange::Deselected {
                    name: name.to_string(),
                },
            }
        } else {
            Transition {
                state: Self {
                    current_name: Some(name.to_string()),
                    current_node: Some(node),
                    previous_node: Some(node),
                },
                restore,
                change: SelectionChange::Selected {
                    name: name.to_string(),
                    node,
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALL_A: NodeId = NodeId(1);
    const WALL_B: NodeId = NodeId(2);
    const ROOF: NodeId = NodeId(3);
    const BY_NAME: SelectionIdentity = SelectionIdentity::DisplayName;

    fn selected(name: &str, node: NodeId) -> SelectionState {
        SelectionState {
            current_name: Some(name.to_string()),
            current_node: Some(node),
            previous_node: Some(node),
        }
    }

    #[test]
    fn test_idle_pick_selects() {
        let transition = SelectionState::idle().on_pick(ROOF, "Roof", BY_NAME);

        assert_eq!(transition.state, selected("Roof", ROOF));
        assert_eq!(transition.restore, None);
        assert_eq!(
            transition.change,
            SelectionChange::Selected {
                name: "Roof".to_string(),
                node: ROOF
            }
        );
    }

    #[test]
    fn test_switch_restores_previous() {
        let transition = selected("Roof", ROOF).on_pick(WALL_A, "Wall", BY_NAME);

        assert_eq!(transition.state, selected("Wall", WALL_A));
        assert_eq!(transition.restore, Some(ROOF));
    }

    #[test]
    fn test_repick_same_node_goes_idle() {
        let transition = selected("Roof", ROOF).on_pick(ROOF, "Roof", BY_NAME);

        assert!(transition.state.is_idle());
        assert_eq!(transition.state.previous_node, None);
        assert_eq!(transition.restore, None);
    }

    #[test]
    fn test_same_name_other_node_deselects_by_name() {
        let transition = selected("Wall", WALL_A).on_pick(WALL_B, "Wall", BY_NAME);

        assert_eq!(transition.state, SelectionState::idle());
        assert_eq!(transition.restore, Some(WALL_A));
        assert_eq!(
            transition.change,
            SelectionChange::Deselected {
                name: "Wall".to_string()
            }
        );
    }

    #[test]
    fn test_same_name_other_node_selects_by_node_identity() {
        let transition = selected("Wall", WALL_A).on_pick(WALL_B, "Wall", SelectionIdentity::Node);

        assert_eq!(transition.state, selected("Wall", WALL_B));
        assert_eq!(transition.restore, Some(WALL_A));

        let again = transition.state.on_pick(WALL_B, "Wall", SelectionIdentity::Node);
        assert!(again.state.is_idle());
    }
}
