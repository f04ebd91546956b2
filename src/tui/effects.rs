//! Executes the `Effect`s returned by `core::action::update`.
//!
//! Every effect becomes a tokio task whose outcome is sent back to the event
//! loop as an `Action` over the channel handed to `EffectRunner::new`.
//! Nothing here touches `App`.

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use log::{debug, info, warn};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect};
use crate::inventory::{InventoryClient, InventoryEntry};

pub struct EffectRunner {
    client: Arc<dyn InventoryClient>,
    tx: UnboundedSender<Action>,
    /// The one cancellable timer: expiry of the current status message.
    expiry_timer: Option<AbortHandle>,
}

impl EffectRunner {
    pub fn new(client: Arc<dyn InventoryClient>, tx: UnboundedSender<Action>) -> Self {
        Self {
            client,
            tx,
            expiry_timer: None,
        }
    }

    pub fn run(&mut self, effect: Effect) {
        debug!("Running effect: {:?}", effect);
        match effect {
            Effect::Quit => {}
            Effect::Fetch => self.spawn_fetch(),
            Effect::Upsert(entry) => self.spawn_upsert(entry),
            Effect::Delete(name) => self.spawn_delete(name),
            Effect::ScheduleRefresh(after) => {
                spawn_timer(after, Action::RefreshTick, self.tx.clone());
            }
            Effect::ScheduleMessageExpiry { id, after } => {
                self.cancel_expiry();
                let handle = spawn_timer(after, Action::MessageExpired(id), self.tx.clone());
                self.expiry_timer = Some(handle);
            }
            Effect::CancelMessageExpiry => self.cancel_expiry(),
        }
    }

    pub fn run_all(&mut self, effects: impl IntoIterator<Item = Effect>) {
        for effect in effects {
            self.run(effect);
        }
    }

    fn cancel_expiry(&mut self) {
        if let Some(handle) = self.expiry_timer.take() {
            handle.abort();
        }
    }

    fn spawn_fetch(&self) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.list().await;
            send_loaded(&tx, result);
        });
    }

    fn spawn_upsert(&self, entry: InventoryEntry) {
        info!("Submitting server '{}'", entry.name);
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            // Re-list after the write so the view shows what the server stored.
            let result = match client.upsert(&entry).await {
                Ok(()) => client.list().await,
                Err(e) => Err(e),
            };
            send_loaded(&tx, result);
        });
    }

    fn spawn_delete(&self, name: String) {
        info!("Deleting server '{}'", name);
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = match client.delete(&name).await {
                Ok(()) => client.list().await,
                Err(e) => Err(e),
            };
            send_loaded(&tx, result);
        });
    }
}

fn send_loaded(
    tx: &UnboundedSender<Action>,
    result: Result<Vec<InventoryEntry>, crate::inventory::ClientError>,
) {
    if let Err(e) = &result {
        warn!("Inventory request failed: {e}");
    }
    let action = Action::InventoryLoaded {
        result,
        at: Local::now(),
    };
    if tx.send(action).is_err() {
        warn!("Failed to deliver inventory result: receiver dropped");
    }
}

fn spawn_timer(after: Duration, action: Action, tx: UnboundedSender<Action>) -> AbortHandle {
    tokio::spawn(async move {
        tokio::time::sleep(after).await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver timer event: receiver dropped");
        }
    })
    .abort_handle()
}
