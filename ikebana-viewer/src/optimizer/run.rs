use super::protocol::{ArrangementId, BaseRequest, BaseResult, ExtensionRequest, ExtensionResult};
use super::transport::Optimizer;
use crate::engine::assets::catalog::FlowerCatalog;
use crate::engine::assets::model_source::ModelLoader;
use crate::engine::core::config::ViewerConfig;
use crate::engine::loading::load_batch::{BatchProgress, LoadBatch, LoadSequence, SequenceProgress};
use crate::engine::loading::overlay::LoadingIndicator;
use crate::engine::scene::composer::SceneComposer;
use crate::error::RunError;
use crate::tools::control_panel::state::ControlPanel;
use bevy::prelude::*;
use bevy::tasks::{Task, block_on, futures_lite::future};

/// Request to run both optimization phases.
#[derive(Event, Debug, Clone, Default, PartialEq, Eq)]
pub struct StartOptimization {
    pub forced_flower: String,
    pub vase: String,
}

/// Written once per run, on success or failure.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunFinished {
    pub succeeded: bool,
}

/// Base composition finished; the export group holds the base branches.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ExportRequested {
    pub arrangement_id: ArrangementId,
}

#[derive(Default)]
pub enum RunPhase {
    #[default]
    Idle,
    RequestingBase(Task<Result<BaseResult, RunError>>),
    LoadingBase {
        result: BaseResult,
        batch: LoadBatch,
    },
    RequestingExtension(Task<Result<ExtensionResult, RunError>>),
    LoadingExtension(LoadSequence),
}

impl RunPhase {
    fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::RequestingBase(_) => "requesting base",
            Self::LoadingBase { .. } => "loading base",
            Self::RequestingExtension(_) => "requesting extension",
            Self::LoadingExtension(_) => "loading extension",
        }
    }
}

/// The single in-flight optimization run.
#[derive(Resource, Default)]
pub struct OptimizationRun {
    phase: RunPhase,
    pub last_outcome: Option<bool>,
}

impl OptimizationRun {
    pub fn is_active(&self) -> bool {
        !matches!(self.phase, RunPhase::Idle)
    }

    pub fn phase_name(&self) -> &'static str {
        self.phase.name()
    }
}

/// Kicks off the configured run at startup.
pub fn request_initial_run(config: Res<ViewerConfig>, mut starts: EventWriter<StartOptimization>) {
    if config.auto_start {
        starts.write(StartOptimization {
            forced_flower: config.forced_flower.clone(),
            vase: config.vase.clone(),
        });
    }
}

pub fn start_optimization_runs(
    mut starts: EventReader<StartOptimization>,
    mut run: ResMut<OptimizationRun>,
    mut indicator: ResMut<LoadingIndicator>,
    optimizer: Res<Optimizer>,
) {
    for start in starts.read() {
        if run.is_active() {
            warn!(
                "Optimization already in progress ({}); ignoring new request",
                run.phase_name()
            );
            continue;
        }

        info!(
            "Starting optimization (forced_flower='{}', vase='{}')",
            start.forced_flower, start.vase
        );
        indicator.show();
        run.phase = RunPhase::RequestingBase(optimizer.spawn_base(BaseRequest {
            forced_flower: start.forced_flower.clone(),
            vase: start.vase.clone(),
        }));
    }
}

/// Drives the run state machine one step per frame.
#[allow(clippy::too_many_arguments)]
pub fn poll_optimization_run(
    mut run: ResMut<OptimizationRun>,
    mut composer: SceneComposer,
    mut panel: ResMut<ControlPanel>,
    mut finished: EventWriter<RunFinished>,
    mut exports: EventWriter<ExportRequested>,
    loader: Res<ModelLoader>,
    optimizer: Res<Optimizer>,
    catalog: Res<FlowerCatalog>,
) {
    let phase = std::mem::take(&mut run.phase);
    let step = match phase {
        RunPhase::Idle => return,
        RunPhase::RequestingBase(mut task) => match block_on(future::poll_once(&mut task)) {
            None => Ok(RunPhase::RequestingBase(task)),
            Some(Err(err)) => Err(err),
            Some(Ok(result)) => {
                info!(
                    "Base arrangement received (arr_id: {})",
                    result
                        .arr_id
                        .as_ref()
                        .map_or_else(|| "none".to_string(), ToString::to_string)
                );
                composer.clear();
                panel.reset();
                result
                    .placements(&catalog)
                    .map(|placements| RunPhase::LoadingBase {
                        batch: LoadBatch::start(&loader, placements),
                        result,
                    })
                    .map_err(RunError::from)
            }
        },
        RunPhase::LoadingBase { result, mut batch } => match batch.poll() {
            BatchProgress::Pending => Ok(RunPhase::LoadingBase { result, batch }),
            BatchProgress::Failed(slot, err) => {
                error!("Base load for {} failed", slot);
                Err(err.into())
            }
            BatchProgress::Complete(models) => {
                for (placement, model) in &models {
                    composer.attach(placement, model);
                    panel.rebuild_color_control(placement.slot, &placement.flower_type, &catalog);
                    panel.set_angle_display(placement.slot, placement.angle);
                }
                info!("Base composition complete ({} branches)", models.len());

                match result.arr_id.clone().filter(ArrangementId::is_present) {
                    Some(arrangement_id) => {
                        exports.write(ExportRequested { arrangement_id });
                    }
                    None => warn!("Base result has no usable arr_id; skipping point cloud export"),
                }

                Ok(RunPhase::RequestingExtension(
                    optimizer.spawn_extension(ExtensionRequest::from_base(&result)),
                ))
            }
        },
        RunPhase::RequestingExtension(mut task) => match block_on(future::poll_once(&mut task)) {
            None => Ok(RunPhase::RequestingExtension(task)),
            Some(Err(err)) => Err(err),
            Some(Ok(extension)) => {
                info!(
                    "Extension received (middle3: {}, middle4: {})",
                    extension.assignments.middle3, extension.assignments.middle4
                );
                extension
                    .placements(&catalog)
                    .map(|placements| RunPhase::LoadingExtension(LoadSequence::new(placements)))
                    .map_err(RunError::from)
            }
        },
        RunPhase::LoadingExtension(mut sequence) => match sequence.poll(&loader) {
            SequenceProgress::Pending => Ok(RunPhase::LoadingExtension(sequence)),
            SequenceProgress::Loaded(placement, model) => {
                composer.attach(&placement, &model);
                panel.rebuild_color_control(placement.slot, &placement.flower_type, &catalog);
                panel.set_angle_display(placement.slot, placement.angle);
                Ok(RunPhase::LoadingExtension(sequence))
            }
            SequenceProgress::Failed(slot, err) => {
                error!("Extension load for {} failed", slot);
                Err(err.into())
            }
            SequenceProgress::Done => {
                info!("Optimization run complete");
                finish(&mut run, &mut finished, true);
                return;
            }
        },
    };

    match step {
        Ok(next) => run.phase = next,
        Err(err) => {
            error!("Optimization run failed: {}", err);
            finish(&mut run, &mut finished, false);
        }
    }
}

fn finish(run: &mut OptimizationRun, finished: &mut EventWriter<RunFinished>, succeeded: bool) {
    run.phase = RunPhase::Idle;
    run.last_outcome = Some(succeeded);
    finished.write(RunFinished { succeeded });
}

/// Hides the loading indicator whenever a run ends, whatever the outcome.
pub fn dismiss_indicator_on_finish(
    mut finished: EventReader<RunFinished>,
    mut indicator: ResMut<LoadingIndicator>,
) {
    for event in finished.read() {
        debug!("Run finished (succeeded: {}); dismissing indicator", event.succeeded);
        indicator.dismiss();
    }
}
