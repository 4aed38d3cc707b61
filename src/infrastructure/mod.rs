/// Infrastructure layer for external integrations.
///
/// This module contains:
/// - DynamoDB-backed persistence for groups
/// - An in-process store with the same scan semantics
pub mod persistence;
