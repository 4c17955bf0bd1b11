//! Randomized multi-frame capture session

use crate::config::SessionConfig;
use ndarray::Axis;
use synthpose_algorithms::{frame_scene, project_scene, OrientationSampler};
use synthpose_core::{Error, Renderer, Result, Scene, SegmentationSource};
use synthpose_io::{clean_folder, write_npy, AnnotationRecord, AnnotationStore, OutputLayout};

/// Where a session is in its lifecycle.
///
/// A failed session stays in the state it failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Initializing,
    Capturing { iteration: usize },
    Finalizing,
    Done,
}

/// Drives a renderer through `capture_count` randomly oriented frames and
/// writes the images, segmentation masks and annotation document.
///
/// Each iteration draws a random delta rotation and applies it to both the
/// camera axis and the light, so orientations accumulate across frames. The
/// first error aborts the session; `annotation.json` is only written once
/// every frame has been captured.
pub struct CaptureSession<R, S> {
    config: SessionConfig,
    layout: OutputLayout,
    scene: Scene,
    renderer: R,
    segmentation: S,
    sampler: OrientationSampler,
    store: AnnotationStore,
    state: SessionState,
}

impl<R: Renderer, S: SegmentationSource> CaptureSession<R, S> {
    /// Create an idle session. The sampler is seeded from `config.seed` when set.
    pub fn new(config: SessionConfig, scene: Scene, renderer: R, segmentation: S) -> Self {
        let layout = config.layout();
        let sampler = OrientationSampler::new(config.seed);
        Self {
            config,
            layout,
            scene,
            renderer,
            segmentation,
            sampler,
            store: AnnotationStore::new(),
            state: SessionState::Idle,
        }
    }

    /// Replace the orientation sampler
    pub fn with_sampler(mut self, sampler: OrientationSampler) -> Self {
        self.sampler = sampler;
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    /// Records captured so far
    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    /// Run the whole session and return the finished annotation store.
    ///
    /// A capture count of 0 returns an empty store without touching the
    /// filesystem.
    #[tracing::instrument(skip(self), fields(count = self.config.capture_count))]
    pub fn run(&mut self) -> Result<&AnnotationStore> {
        if self.state != SessionState::Idle {
            return Err(Error::Algorithm(format!(
                "capture session cannot run from state {:?}",
                self.state
            )));
        }

        if self.config.capture_count == 0 {
            tracing::info!("capture count is 0, no data generated");
            self.state = SessionState::Done;
            return Ok(&self.store);
        }

        self.state = SessionState::Initializing;
        self.initialize()?;

        for iteration in 0..self.config.capture_count {
            self.state = SessionState::Capturing { iteration };
            let record = self.capture(iteration)?;
            self.store.append(record);
        }

        self.state = SessionState::Finalizing;
        self.finalize()?;

        self.state = SessionState::Done;
        Ok(&self.store)
    }

    fn initialize(&mut self) -> Result<()> {
        if let Some(source) = &self.config.object_source_file {
            tracing::info!(source = %source.display(), "capturing imported model");
        }

        self.layout.create_directories()?;
        self.layout.clean_outputs()?;
        clean_folder(self.layout.temp_dir())?;

        self.scene.assign_pass_indices();
        frame_scene(&mut self.scene)?;
        self.scene.render.image_format = self.config.image_format;

        tracing::info!(
            root = %self.layout.root().display(),
            meshes = self.scene.meshes.len(),
            location = ?self.scene.camera.location,
            "session initialized"
        );
        Ok(())
    }

    fn capture(&mut self, iteration: usize) -> Result<AnnotationRecord> {
        let delta = self.sampler.sample();
        self.scene.rotate_rigs(&delta);

        let image_path = self.layout.image_path(iteration);
        tracing::debug!(iteration, path = %image_path.display(), "rendering frame");
        self.renderer.render(&self.scene, &image_path)?;

        let segmentation_file = match self.segmentation.extract_segmentation(&self.scene)? {
            Some(pass) => {
                if pass.len_of(Axis(2)) == 0 {
                    return Err(Error::InvalidData(
                        "segmentation pass has no channels".to_string(),
                    ));
                }
                // object index is stored in the first channel
                let mask = pass.index_axis(Axis(2), 0);
                write_npy(self.layout.segmentation_path(iteration), mask)?;
                Some(OutputLayout::segmentation_file_name(iteration))
            }
            None => {
                tracing::warn!(iteration, "no segmentation pass for frame");
                None
            }
        };

        let bbox = if self.config.annotate_bounding_boxes {
            let boxes: Vec<_> = project_scene(&self.scene)
                .into_iter()
                .map(|object| object.bbox)
                .collect();
            if boxes.is_empty() {
                tracing::debug!(iteration, "no mesh visible, frame has an empty bbox list");
            }
            Some(boxes)
        } else {
            None
        };

        Ok(AnnotationRecord {
            id: iteration,
            image_file: OutputLayout::image_file_name(iteration),
            segmentation_file,
            quaternion: self.scene.camera_axis.orientation,
            bbox,
        })
    }

    fn finalize(&mut self) -> Result<()> {
        let path = self.layout.annotation_path();
        self.store.write_to_path(&path)?;
        tracing::info!(records = self.store.len(), path = %path.display(), "annotation written");
        Ok(())
    }
}

impl<R, S> std::fmt::Debug for CaptureSession<R, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureSession")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("records", &self.store.len())
            .finish_non_exhaustive()
    }
}
