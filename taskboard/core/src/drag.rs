//! Host-agnostic drag and drop protocol.
//!
//! The only thing that crosses a drag session is the project id, written as a
//! single `text/plain` field. The list a project is dropped on decides the new
//! status, so dropping on the list a project already belongs to is a no-op.
use crate::project::{ProjectId, ProjectStatus};
use crate::store::ProjectStore;
use std::collections::HashMap;
use tracing::debug;

/// Format under which the project id travels.
pub const PAYLOAD_FORMAT: &str = "text/plain";

/// Visual feedback requested from the host while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Link,
    Move,
}

impl DropEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropEffect::None => "none",
            DropEffect::Copy => "copy",
            DropEffect::Link => "link",
            DropEffect::Move => "move",
        }
    }
}

/// The data store attached to a drag session by the host.
pub trait DataTransfer {
    fn set_data(&mut self, format: &str, data: &str);
    fn get_data(&self, format: &str) -> Option<String>;
    /// Whether data of `format` is attached. Hosts may hide the data itself
    /// until the drop, but always expose the formats.
    fn has_type(&self, format: &str) -> bool;
    fn set_drop_effect(&mut self, effect: DropEffect);
}

/// In-memory [`DataTransfer`] for tests and hosts without a native session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryTransfer {
    data: HashMap<String, String>,
    drop_effect: DropEffect,
}

impl MemoryTransfer {
    pub fn new() -> Self {
        MemoryTransfer::default()
    }

    pub fn drop_effect(&self) -> DropEffect {
        self.drop_effect
    }
}

impl DataTransfer for MemoryTransfer {
    fn set_data(&mut self, format: &str, data: &str) {
        self.data.insert(format.to_string(), data.to_string());
    }

    fn get_data(&self, format: &str) -> Option<String> {
        self.data.get(format).cloned()
    }

    fn has_type(&self, format: &str) -> bool {
        self.data.contains_key(format)
    }

    fn set_drop_effect(&mut self, effect: DropEffect) {
        self.drop_effect = effect;
    }
}

/// Writes `id` as the sole payload of a drag session.
pub fn write_payload(transfer: &mut impl DataTransfer, id: &ProjectId) {
    transfer.set_data(PAYLOAD_FORMAT, id.as_str());
    transfer.set_drop_effect(DropEffect::Move);
}

/// Reads the project id carried by a drag session, if any.
pub fn read_payload(transfer: &impl DataTransfer) -> Option<ProjectId> {
    transfer
        .get_data(PAYLOAD_FORMAT)
        .map(|data| data.trim().to_string())
        .filter(|data| !data.is_empty())
        .map(ProjectId::from)
}

/// Whether a drag session carries something a list can accept.
pub fn carries_payload(transfer: &impl DataTransfer) -> bool {
    transfer.has_type(PAYLOAD_FORMAT)
}

/// Something the user can pick up and drag.
pub trait Draggable {
    fn drag_start(&self, transfer: &mut impl DataTransfer);
    fn drag_end(&self);
}

/// A request, produced by a drop, to move a project to the target's status.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveRequest {
    pub id: ProjectId,
    pub status: ProjectStatus,
}

impl MoveRequest {
    /// Applies the move, returning whether the store changed
    pub fn apply(&self, store: &mut ProjectStore) -> bool {
        store.move_project(&self.id, self.status)
    }
}

/// Progress of a single drag session as seen by the board.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(ProjectId),
    Over {
        id: ProjectId,
        target: ProjectStatus,
    },
}

impl DragState {
    /// A drag of `id` began. Any previous session is abandoned.
    pub fn start(&mut self, id: ProjectId) {
        debug!(project_id = %id, "Drag started");
        *self = DragState::Dragging(id);
    }

    /// The pointer entered the list for `target`.
    pub fn enter(&mut self, target: ProjectStatus) {
        if let Some(id) = self.dragged().cloned() {
            *self = DragState::Over { id, target };
        }
    }

    /// The pointer left whatever list it was over.
    pub fn leave(&mut self) {
        *self = match std::mem::take(self) {
            DragState::Over { id, .. } => DragState::Dragging(id),
            other => other,
        };
    }

    /// The session ended in a drop; returns the dragged id and the target.
    pub fn complete(&mut self) -> Option<(ProjectId, ProjectStatus)> {
        match std::mem::take(self) {
            DragState::Over { id, target } => Some((id, target)),
            _ => None,
        }
    }

    /// The host ended the session without a drop.
    pub fn cancel(&mut self) {
        if !matches!(self, DragState::Idle) {
            debug!("Drag cancelled");
        }
        *self = DragState::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    pub fn dragged(&self) -> Option<&ProjectId> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(id) | DragState::Over { id, .. } => Some(id),
        }
    }
}
