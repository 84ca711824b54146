use crate::engine::assets::flower_model::FlowerModel;
use crate::engine::assets::model_source::ModelLoader;
use crate::engine::scene::composer::BranchPlacement;
use crate::error::LoadError;
use bevy::tasks::{Task, block_on, futures_lite::future};
use constants::BranchSlot;
use std::collections::VecDeque;

type LoadTask = Task<Result<FlowerModel, LoadError>>;

pub enum BatchProgress {
    Pending,
    /// Every load succeeded; models in slot order.
    Complete(Vec<(BranchPlacement, FlowerModel)>),
    /// First failure seen. Remaining loads are dropped.
    Failed(BranchSlot, LoadError),
}

/// Concurrent, all-or-nothing group of model loads.
pub struct LoadBatch {
    pending: Vec<(BranchPlacement, LoadTask)>,
    done: Vec<(BranchPlacement, FlowerModel)>,
}

impl LoadBatch {
    pub fn start(loader: &ModelLoader, placements: Vec<BranchPlacement>) -> Self {
        let pending = placements
            .into_iter()
            .map(|placement| {
                let task = loader.spawn(placement.asset_path.clone());
                (placement, task)
            })
            .collect();
        Self {
            pending,
            done: Vec::new(),
        }
    }

    pub fn poll(&mut self) -> BatchProgress {
        let mut waiting = Vec::with_capacity(self.pending.len());
        for (placement, mut task) in self.pending.drain(..) {
            match block_on(future::poll_once(&mut task)) {
                None => waiting.push((placement, task)),
                Some(Ok(model)) => self.done.push((placement, model)),
                Some(Err(err)) => return BatchProgress::Failed(placement.slot, err),
            }
        }
        self.pending = waiting;

        if !self.pending.is_empty() {
            return BatchProgress::Pending;
        }
        let mut done = std::mem::take(&mut self.done);
        done.sort_by_key(|(placement, _)| placement.slot);
        BatchProgress::Complete(done)
    }
}

pub enum SequenceProgress {
    Pending,
    Loaded(BranchPlacement, FlowerModel),
    Done,
    Failed(BranchSlot, LoadError),
}

/// Loads placements strictly one after another. The next load is only
/// issued by the `poll` call after the previous one was handed out.
pub struct LoadSequence {
    queue: VecDeque<BranchPlacement>,
    current: Option<(BranchPlacement, LoadTask)>,
}

impl LoadSequence {
    pub fn new(placements: Vec<BranchPlacement>) -> Self {
        Self {
            queue: placements.into(),
            current: None,
        }
    }

    pub fn poll(&mut self, loader: &ModelLoader) -> SequenceProgress {
        if self.current.is_none() {
            let Some(next) = self.queue.pop_front() else {
                return SequenceProgress::Done;
            };
            let task = loader.spawn(next.asset_path.clone());
            self.current = Some((next, task));
        }

        let Some((_, task)) = self.current.as_mut() else {
            return SequenceProgress::Pending;
        };
        let Some(result) = block_on(future::poll_once(task)) else {
            return SequenceProgress::Pending;
        };
        let Some((placement, _)) = self.current.take() else {
            return SequenceProgress::Pending;
        };

        match result {
            Ok(model) => SequenceProgress::Loaded(placement, model),
            Err(err) => SequenceProgress::Failed(placement.slot, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::flower_model::test_models::stem_and_flower;
    use crate::engine::assets::model_source::ModelSource;
    use crate::engine::scene::branches::BranchAngle;
    use bevy::tasks::{IoTaskPool, TaskPool};
    use std::sync::{Arc, Mutex};

    struct LoggedSource {
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl ModelSource for LoggedSource {
        fn load(&self, path: &str) -> Result<FlowerModel, LoadError> {
            self.calls.lock().unwrap().push(path.to_string());
            if path.contains("missing") {
                return Err(LoadError::Empty(path.to_string()));
            }
            Ok(stem_and_flower(path))
        }
    }

    fn placement(slot: BranchSlot, asset_path: &str) -> BranchPlacement {
        BranchPlacement {
            slot,
            flower_type: "バラ".into(),
            asset_path: asset_path.into(),
            length: 1.0,
            angle: BranchAngle::default(),
            offset: (0.0, 0.0),
        }
    }

    fn loader() -> (ModelLoader, Arc<Mutex<Vec<String>>>) {
        IoTaskPool::get_or_init(TaskPool::new);
        let calls = Arc::new(Mutex::new(Vec::new()));
        let loader = ModelLoader::new(LoggedSource {
            calls: Arc::clone(&calls),
        });
        (loader, calls)
    }

    fn poll_batch(batch: &mut LoadBatch) -> BatchProgress {
        for _ in 0..500 {
            match batch.poll() {
                BatchProgress::Pending => std::thread::sleep(std::time::Duration::from_millis(2)),
                other => return other,
            }
        }
        BatchProgress::Pending
    }

    #[test]
    fn batch_completes_in_slot_order() {
        let (loader, _) = loader();
        let mut batch = LoadBatch::start(
            &loader,
            vec![
                placement(BranchSlot::Middle2, "d.glb"),
                placement(BranchSlot::Main, "a.glb"),
                placement(BranchSlot::Guest, "b.glb"),
            ],
        );
        match poll_batch(&mut batch) {
            BatchProgress::Complete(models) => {
                let slots: Vec<_> = models.iter().map(|(p, _)| p.slot).collect();
                assert_eq!(slots, vec![BranchSlot::Main, BranchSlot::Guest, BranchSlot::Middle2]);
            }
            _ => panic!("batch did not complete"),
        }
    }

    #[test]
    fn batch_reports_first_failure() {
        let (loader, _) = loader();
        let mut batch = LoadBatch::start(
            &loader,
            vec![
                placement(BranchSlot::Main, "a.glb"),
                placement(BranchSlot::Middle1, "missing.glb"),
            ],
        );
        match poll_batch(&mut batch) {
            BatchProgress::Failed(slot, LoadError::Empty(path)) => {
                assert_eq!(slot, BranchSlot::Middle1);
                assert_eq!(path, "missing.glb");
            }
            _ => panic!("expected failure"),
        }
    }

    #[test]
    fn sequence_issues_one_load_at_a_time() {
        let (loader, calls) = loader();
        let mut sequence = LoadSequence::new(vec![
            placement(BranchSlot::Middle3, "c.glb"),
            placement(BranchSlot::Middle4, "d.glb"),
        ]);

        let mut loaded = Vec::new();
        for _ in 0..1000 {
            match sequence.poll(&loader) {
                SequenceProgress::Pending => {
                    std::thread::sleep(std::time::Duration::from_millis(2));
                }
                SequenceProgress::Loaded(placement, _) => {
                    assert_eq!(calls.lock().unwrap().len(), loaded.len() + 1);
                    loaded.push(placement.slot);
                }
                SequenceProgress::Done => break,
                SequenceProgress::Failed(slot, err) => panic!("{slot} failed: {err}"),
            }
        }
        assert_eq!(loaded, vec![BranchSlot::Middle3, BranchSlot::Middle4]);
    }
}
