//! Sheet Session - Application service owning one character sheet
//!
//! The session applies user actions to its sheet, notifies observers after
//! every change, and exchanges the sheet with the remote store. Store
//! failures are logged and swallowed: the in-memory sheet is left as it was.
//!
//! Load and save borrow the session across the store round trip, so a caller
//! that awaits `dispatch` inline (the console does) takes no further input
//! until the store answers or the client timeout expires. The snapshot sent by
//! a save is taken before the request starts.

use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};

use crate::application::dto::SheetSnapshot;
use crate::application::ports::inbound::SheetAction;
use crate::application::ports::outbound::{SheetObserver, SheetStorePort};
use crate::domain::entities::CharacterSheet;
use crate::domain::events::{SheetChange, SheetEvent};
use crate::domain::value_objects::Catalog;

pub struct SheetSession {
    sheet: CharacterSheet,
    store: Arc<dyn SheetStorePort>,
    observers: Vec<Arc<dyn SheetObserver>>,
    started: bool,
}

impl SheetSession {
    pub fn new(catalog: Arc<Catalog>, store: Arc<dyn SheetStorePort>) -> Self {
        Self {
            sheet: CharacterSheet::new(catalog),
            store,
            observers: Vec::new(),
            started: false,
        }
    }

    pub fn sheet(&self) -> &CharacterSheet {
        &self.sheet
    }

    /// Register a rendering collaborator
    pub fn subscribe(&mut self, observer: Arc<dyn SheetObserver>) {
        self.observers.push(observer);
    }

    /// Start the session by loading the stored sheet. Only the first call
    /// loads; later calls are ignored. Returns whether a sheet was loaded.
    pub async fn start(&mut self) -> bool {
        if self.started {
            warn!("Sheet session already started");
            return false;
        }
        self.started = true;
        info!("Starting sheet session");
        self.load_game().await
    }

    /// Apply one user action. Returns whether the sheet (or the store) changed.
    pub async fn dispatch(&mut self, action: SheetAction) -> bool {
        debug!(?action, "Dispatching sheet action");
        match action {
            SheetAction::Increment(attribute) => self.apply(|s| s.increment(attribute)),
            SheetAction::Decrement(attribute) => self.apply(|s| s.decrement(attribute)),
            SheetAction::AddSkill(skill) => self.apply(|s| s.add_skill(&skill)),
            SheetAction::RemoveSkill(skill) => self.apply(|s| s.remove_skill(&skill)),
            SheetAction::ToggleClass(class) => self.apply(|s| s.toggle_class_visibility(&class)),
            SheetAction::Save => self.save_game().await,
            SheetAction::Load => self.load_game().await,
        }
    }

    fn apply(&mut self, mutate: impl FnOnce(&mut CharacterSheet) -> Option<SheetChange>) -> bool {
        match mutate(&mut self.sheet) {
            Some(change) => {
                self.notify(SheetEvent::new(change));
                true
            }
            None => {
                debug!("Sheet action rejected, sheet unchanged");
                false
            }
        }
    }

    /// Replace the sheet with the stored one. Returns whether it was replaced.
    #[instrument(skip(self))]
    pub async fn load_game(&mut self) -> bool {
        let snapshot = match self.store.load().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!(error = %e, "Failed to load character sheet");
                return false;
            }
        };

        let (attributes, modifiers, skill_points) = snapshot.into_parts();
        let change = self.sheet.restore(attributes, modifiers, skill_points);

        let drift = self.sheet.modifier_drift();
        if !drift.is_empty() {
            warn!(
                attributes = ?drift,
                "Loaded modifiers disagree with loaded attribute values"
            );
        }

        info!(
            attribute_total = self.sheet.attributes().total(),
            skill_points = self.sheet.skill_points().total(),
            "Loaded character sheet"
        );
        self.notify(SheetEvent::new(change));
        true
    }

    /// Send the sheet as it is now to the store. Returns whether the store
    /// acknowledged it.
    #[instrument(skip(self))]
    pub async fn save_game(&self) -> bool {
        let snapshot = SheetSnapshot::from_sheet(&self.sheet);
        match self.store.save(&snapshot).await {
            Ok(ack) => {
                info!(ack = %ack.body, "Saved character sheet");
                self.notify(SheetEvent::new(SheetChange::Saved));
                true
            }
            Err(e) => {
                error!(error = %e, "Failed to save character sheet");
                false
            }
        }
    }

    fn notify(&self, event: SheetEvent) {
        debug!(
            event_type = event.event_type(),
            at = %event.metadata.timestamp,
            "Sheet changed"
        );
        for observer in &self.observers {
            observer.on_sheet_changed(&event, &self.sheet);
        }
    }
}
