//! Panel composition: one independent read per entity for the current role.

use crate::core::query::ReadQuery;
use crate::db::access::DataAccess;
use crate::models::entity::Entity;
use crate::models::identity::Identity;
use crate::models::rowset::RowSet;

/// What one panel shows: the rows, or the error that replaced them.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub entity: Entity,
    pub content: Result<RowSet, String>,
}

pub struct ViewLogic;

impl ViewLogic {
    pub fn panel<D: DataAccess + ?Sized>(dal: &mut D, identity: &Identity, entity: Entity) -> Panel {
        let query = ReadQuery::for_panel(entity, identity);
        let content = dal
            .fetch(query.statement.sql, &query.statement.params)
            .map_err(|e| e.to_string());
        Panel { entity, content }
    }

    /// All three panels. A failing panel does not prevent the others.
    pub fn compose<D: DataAccess + ?Sized>(dal: &mut D, identity: &Identity) -> Vec<Panel> {
        Entity::ALL
            .iter()
            .map(|&entity| Self::panel(dal, identity, entity))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::access::ExecOutcome;
    use crate::errors::{AppError, AppResult};
    use crate::models::role::Role;
    use crate::models::rowset::Value;

    /// Fails every read that touches the positions table.
    struct NoPositions;

    impl DataAccess for NoPositions {
        fn fetch(&mut self, sql: &str, _params: &[Value]) -> AppResult<RowSet> {
            if sql.contains("FROM positions") {
                Err(AppError::Other("no such table: positions".into()))
            } else {
                Ok(RowSet::new(vec!["id".into()]))
            }
        }

        fn execute(&mut self, _sql: &str, _params: &[Value]) -> ExecOutcome {
            ExecOutcome::ok()
        }
    }

    #[test]
    fn failing_panel_is_isolated() {
        let panels = ViewLogic::compose(&mut NoPositions, &Identity::declared(Role::HrManager));

        assert_eq!(panels.len(), 3);
        assert!(panels[0].content.is_ok());
        assert!(panels[1].content.is_ok());
        assert_eq!(panels[2].entity, Entity::Position);
        assert!(panels[2].content.as_ref().unwrap_err().contains("no such table"));
    }
}
