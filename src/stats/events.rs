//! Stats domain: stat mutation messages.

use bevy::ecs::message::Message;

use crate::popup::StatKind;

/// A scripted change to one of the player's stat pools. Positive amounts
/// increase the pool.
#[derive(Debug)]
pub struct StatChangeEvent {
    pub kind: StatKind,
    pub amount: i32,
}

impl Message for StatChangeEvent {}
