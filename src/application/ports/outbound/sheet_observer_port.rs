//! Sheet observer port - Rendering collaborator notified after each change

use crate::domain::entities::CharacterSheet;
use crate::domain::events::SheetEvent;

/// Receives every sheet change together with the updated sheet
pub trait SheetObserver: Send + Sync {
    fn on_sheet_changed(&self, event: &SheetEvent, sheet: &CharacterSheet);
}
