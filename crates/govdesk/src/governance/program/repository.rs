use std::sync::Mutex;

use super::definitions;
use super::domain::{Action, Decision, Workshop, WorkshopItem};
use crate::governance::StoreError;

/// Storage abstraction behind the program service. Criteria-state writes go
/// through the dedicated merge methods so concurrent partial updates never
/// overwrite keys they did not carry.
pub trait ProgramRepository: Send + Sync {
    fn workshops(&self) -> Result<Vec<Workshop>, StoreError>;
    fn workshop(&self, number: u8) -> Result<Option<Workshop>, StoreError>;
    fn update_workshop(&self, workshop: Workshop) -> Result<(), StoreError>;
    /// Merge criteria flags into one workshop's state under the store lock.
    /// Keys absent from `patch` keep their stored value.
    fn merge_completion_state(
        &self,
        number: u8,
        patch: &[(String, bool)],
    ) -> Result<Workshop, StoreError>;

    fn items(&self, workshop_number: Option<u8>) -> Result<Vec<WorkshopItem>, StoreError>;
    fn item(&self, item_id: &str) -> Result<Option<WorkshopItem>, StoreError>;
    fn update_item(&self, item: WorkshopItem) -> Result<(), StoreError>;
    /// Same merge contract as `merge_completion_state`, for item acceptance
    /// criteria.
    fn merge_acceptance_state(
        &self,
        item_id: &str,
        patch: &[(String, bool)],
    ) -> Result<WorkshopItem, StoreError>;

    fn actions(&self) -> Result<Vec<Action>, StoreError>;
    fn action(&self, id: &str) -> Result<Option<Action>, StoreError>;
    fn insert_action(&self, action: Action) -> Result<(), StoreError>;
    fn update_action(&self, action: Action) -> Result<(), StoreError>;
    fn delete_action(&self, id: &str) -> Result<(), StoreError>;

    fn decisions(&self) -> Result<Vec<Decision>, StoreError>;
    fn insert_decision(&self, decision: Decision) -> Result<(), StoreError>;
    fn delete_decision(&self, id: &str) -> Result<(), StoreError>;
}

/// Mutex-guarded reference store used by the API service and tests.
#[derive(Debug)]
pub struct InMemoryProgramStore {
    inner: Mutex<ProgramState>,
}

#[derive(Debug, Default)]
struct ProgramState {
    workshops: Vec<Workshop>,
    items: Vec<WorkshopItem>,
    actions: Vec<Action>,
    decisions: Vec<Decision>,
}

impl Default for InMemoryProgramStore {
    /// Fresh tenant: the full catalog provisioned, no actions or decisions.
    fn default() -> Self {
        let (workshops, items) = definitions::provision();
        Self {
            inner: Mutex::new(ProgramState {
                workshops,
                items,
                ..ProgramState::default()
            }),
        }
    }
}

impl InMemoryProgramStore {
    pub fn provisioned() -> Self {
        Self::default()
    }
}

impl ProgramRepository for InMemoryProgramStore {
    fn workshops(&self) -> Result<Vec<Workshop>, StoreError> {
        let state = self.inner.lock().expect("program store mutex poisoned");
        Ok(state.workshops.clone())
    }

    fn workshop(&self, number: u8) -> Result<Option<Workshop>, StoreError> {
        let state = self.inner.lock().expect("program store mutex poisoned");
        Ok(state
            .workshops
            .iter()
            .find(|workshop| workshop.workshop_number == number)
            .cloned())
    }

    fn update_workshop(&self, workshop: Workshop) -> Result<(), StoreError> {
        let mut state = self.inner.lock().expect("program store mutex poisoned");
        let slot = state
            .workshops
            .iter_mut()
            .find(|stored| stored.workshop_number == workshop.workshop_number)
            .ok_or(StoreError::NotFound)?;
        *slot = workshop;
        Ok(())
    }

    fn merge_completion_state(
        &self,
        number: u8,
        patch: &[(String, bool)],
    ) -> Result<Workshop, StoreError> {
        let mut state = self.inner.lock().expect("program store mutex poisoned");
        let workshop = state
            .workshops
            .iter_mut()
            .find(|stored| stored.workshop_number == number)
            .ok_or(StoreError::NotFound)?;
        for (criterion, checked) in patch {
            workshop
                .completion_criteria_state
                .insert(criterion.clone(), *checked);
        }
        Ok(workshop.clone())
    }

    fn items(&self, workshop_number: Option<u8>) -> Result<Vec<WorkshopItem>, StoreError> {
        let state = self.inner.lock().expect("program store mutex poisoned");
        Ok(state
            .items
            .iter()
            .filter(|item| workshop_number.map_or(true, |number| item.workshop_number == number))
            .cloned()
            .collect())
    }

    fn item(&self, item_id: &str) -> Result<Option<WorkshopItem>, StoreError> {
        let state = self.inner.lock().expect("program store mutex poisoned");
        Ok(state
            .items
            .iter()
            .find(|item| item.item_id == item_id)
            .cloned())
    }

    fn update_item(&self, item: WorkshopItem) -> Result<(), StoreError> {
        let mut state = self.inner.lock().expect("program store mutex poisoned");
        let slot = state
            .items
            .iter_mut()
            .find(|stored| stored.item_id == item.item_id)
            .ok_or(StoreError::NotFound)?;
        *slot = item;
        Ok(())
    }

    fn merge_acceptance_state(
        &self,
        item_id: &str,
        patch: &[(String, bool)],
    ) -> Result<WorkshopItem, StoreError> {
        let mut state = self.inner.lock().expect("program store mutex poisoned");
        let item = state
            .items
            .iter_mut()
            .find(|stored| stored.item_id == item_id)
            .ok_or(StoreError::NotFound)?;
        for (criterion, checked) in patch {
            item.acceptance_state.insert(criterion.clone(), *checked);
        }
        Ok(item.clone())
    }

    fn actions(&self) -> Result<Vec<Action>, StoreError> {
        let state = self.inner.lock().expect("program store mutex poisoned");
        Ok(state.actions.clone())
    }

    fn action(&self, id: &str) -> Result<Option<Action>, StoreError> {
        let state = self.inner.lock().expect("program store mutex poisoned");
        Ok(state.actions.iter().find(|action| action.id == id).cloned())
    }

    fn insert_action(&self, action: Action) -> Result<(), StoreError> {
        let mut state = self.inner.lock().expect("program store mutex poisoned");
        if state.actions.iter().any(|stored| stored.id == action.id) {
            return Err(StoreError::Conflict);
        }
        state.actions.push(action);
        Ok(())
    }

    fn update_action(&self, action: Action) -> Result<(), StoreError> {
        let mut state = self.inner.lock().expect("program store mutex poisoned");
        let slot = state
            .actions
            .iter_mut()
            .find(|stored| stored.id == action.id)
            .ok_or(StoreError::NotFound)?;
        *slot = action;
        Ok(())
    }

    fn delete_action(&self, id: &str) -> Result<(), StoreError> {
        let mut state = self.inner.lock().expect("program store mutex poisoned");
        let before = state.actions.len();
        state.actions.retain(|action| action.id != id);
        if state.actions.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    fn decisions(&self) -> Result<Vec<Decision>, StoreError> {
        let state = self.inner.lock().expect("program store mutex poisoned");
        Ok(state.decisions.clone())
    }

    fn insert_decision(&self, decision: Decision) -> Result<(), StoreError> {
        let mut state = self.inner.lock().expect("program store mutex poisoned");
        if state
            .decisions
            .iter()
            .any(|stored| stored.id == decision.id)
        {
            return Err(StoreError::Conflict);
        }
        state.decisions.push(decision);
        Ok(())
    }

    fn delete_decision(&self, id: &str) -> Result<(), StoreError> {
        let mut state = self.inner.lock().expect("program store mutex poisoned");
        let before = state.decisions.len();
        state.decisions.retain(|decision| decision.id != id);
        if state.decisions.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
