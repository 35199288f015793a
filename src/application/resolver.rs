use crate::domain::input::RunInput;
use crate::domain::operation::{FunctionRunResult, Operation};
use crate::domain::payment_method::PaymentMethod;
use crate::domain::priority::{PriorityEntry, PriorityList};
use crate::error::{CustomizationError, Result};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Turns a merchant priority list into move/hide operations for one checkout.
///
/// Holds a name-keyed view over the methods offered at checkout. When two
/// offered methods share a name, the later one in the input is the one that
/// gets moved.
pub struct PriorityResolver<'a> {
    methods: &'a [PaymentMethod],
    by_name: HashMap<&'a str, &'a PaymentMethod>,
}

impl<'a> PriorityResolver<'a> {
    /// Builds the lookup over `methods`, ignoring entries without an id or name.
    ///
    /// Fails with `NoEligibleMethods` if nothing usable remains.
    pub fn new(methods: &'a [PaymentMethod]) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(methods.len());
        for method in methods.iter().filter(|m| m.is_eligible()) {
            // last write wins
            by_name.insert(method.name.as_str(), method);
        }

        if by_name.is_empty() {
            return Err(CustomizationError::NoEligibleMethods);
        }

        Ok(Self { methods, by_name })
    }

    /// Emits moves in priority-list order, then hides every eligible method
    /// whose name was not moved, in checkout order.
    ///
    /// Move indices are assigned from the running operation count, so they are
    /// contiguous from zero. The numeric `priority` on each entry is ignored.
    pub fn operations(&self, priorities: &PriorityList) -> Result<Vec<Operation>> {
        let mut operations = Vec::with_capacity(self.methods.len());
        let mut processed: HashSet<&str> = HashSet::with_capacity(self.by_name.len());

        for name in priorities.iter().filter_map(PriorityEntry::usable_name) {
            if processed.contains(name) {
                continue;
            }
            if let Some(method) = self.by_name.get(name) {
                operations.push(Operation::move_to(method.id.as_str(), operations.len()));
                processed.insert(method.name.as_str());
            }
        }

        for method in self.methods.iter().filter(|m| m.is_eligible()) {
            if !processed.contains(method.name.as_str()) {
                operations.push(Operation::hide(method.id.as_str()));
            }
        }

        if operations.is_empty() {
            return Err(CustomizationError::NoMatches);
        }
        Ok(operations)
    }
}

/// Resolves operations, reporting why nothing changed when that is the outcome.
pub fn try_resolve(
    methods: &[PaymentMethod],
    raw_priority_config: Option<&str>,
) -> Result<Vec<Operation>> {
    let raw = raw_priority_config
        .filter(|raw| !raw.is_empty())
        .ok_or(CustomizationError::MissingConfiguration)?;
    if methods.is_empty() {
        return Err(CustomizationError::NoEligibleMethods);
    }

    let priorities = PriorityList::from_metafield_value(raw)?;
    PriorityResolver::new(methods)?.operations(&priorities)
}

/// Resolves operations for one checkout. Never fails: every problem with the
/// input degrades to [`FunctionRunResult::no_changes`].
pub fn resolve(methods: &[PaymentMethod], raw_priority_config: Option<&str>) -> FunctionRunResult {
    match try_resolve(methods, raw_priority_config) {
        Ok(operations) => {
            let moves = operations
                .iter()
                .filter(|op| matches!(op, Operation::Move(_)))
                .count();
            debug!(
                moves,
                hides = operations.len() - moves,
                "Resolved payment method operations"
            );
            operations.into()
        }
        Err(err @ CustomizationError::MalformedConfiguration(_)) => {
            warn!(error = %err, "Ignoring priority configuration");
            FunctionRunResult::no_changes()
        }
        Err(err) => {
            debug!(reason = %err, "Leaving payment methods unchanged");
            FunctionRunResult::no_changes()
        }
    }
}

/// Function entry point: resolves the priority list stored on the shop
/// against the methods offered at this checkout.
pub fn run(input: &RunInput) -> FunctionRunResult {
    resolve(&input.payment_methods, input.metafield_value())
}
