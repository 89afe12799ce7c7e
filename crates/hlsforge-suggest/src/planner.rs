//! The [`VariantPlanner`] turns probe results into an ordered variant ladder.
//!
//! Inputs are planned independently. An input without a video stream yields
//! no variants and does not affect the others: [`VariantPlanner::plan_input`]
//! reports the failure, [`VariantPlanner::plan`] absorbs it.

use hlsforge_common::config::PlannerConfig;
use hlsforge_common::{Resolution, Result};
use hlsforge_probe::{ProbeData, ProbeStream};
use rayon::prelude::*;

use crate::codec::SourceCodec;
use crate::master::select_master;
use crate::ratio::RatioCalculator;
use crate::variant::{Reencode, StreamRef, VideoVariant};

/// Parse an ffprobe `bit_rate` string as bits/sec.
///
/// Returns `None` for empty, non-numeric, negative, or overflowing values.
pub fn parse_bandwidth(bit_rate: &str) -> Option<u64> {
    bit_rate.parse().ok()
}

/// Plans HLS video variants from probe data.
#[derive(Debug, Clone)]
pub struct VariantPlanner {
    config: PlannerConfig,
    ratio: RatioCalculator,
}

impl Default for VariantPlanner {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

impl VariantPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        let ratio = RatioCalculator::from_config(&config);
        Self { config, ratio }
    }

    /// Plan every input, in input order.
    ///
    /// Inputs that cannot be planned contribute no variants.
    pub fn plan(&self, inputs: &[ProbeData]) -> Vec<VideoVariant> {
        inputs
            .iter()
            .enumerate()
            .fold(Vec::new(), |mut variants, (ordinal, input)| {
                variants.extend(self.plan_or_skip(ordinal, input));
                variants
            })
    }

    /// Same result as [`plan`](Self::plan), with inputs planned on the rayon
    /// pool.
    pub fn plan_parallel(&self, inputs: &[ProbeData]) -> Vec<VideoVariant> {
        let per_input: Vec<Vec<VideoVariant>> = inputs
            .par_iter()
            .enumerate()
            .map(|(ordinal, input)| self.plan_or_skip(ordinal, input))
            .collect();
        per_input.into_iter().flatten().collect()
    }

    /// Plan the variants for a single input at position `ordinal`.
    ///
    /// # Errors
    ///
    /// Returns [`hlsforge_common::Error::NoVideoStream`] when the input has
    /// no video stream.
    pub fn plan_input(&self, ordinal: usize, input: &ProbeData) -> Result<Vec<VideoVariant>> {
        let master = select_master(&input.streams)?;
        let source = &input.streams[master];
        let stream = StreamRef::new(ordinal, source.index);
        let bandwidth = self.bandwidth(source);

        let codec = SourceCodec::classify(&source.codec_name);
        if codec.is_high_efficiency() {
            tracing::info!(
                input = ordinal,
                stream = source.index,
                "High efficiency stream detected. Copying and adding alternate {} stream",
                self.config.encoder
            );
        }

        let variants = match codec {
            SourceCodec::H264 => vec![self.pass_through(stream, source, bandwidth)],
            SourceCodec::Hevc => vec![
                self.pass_through(stream, source, bandwidth),
                self.reencode(stream, source, bandwidth),
            ],
            SourceCodec::Other(name) => {
                tracing::debug!(input = ordinal, codec = %name, "Re-encoding source stream");
                vec![self.reencode(stream, source, bandwidth)]
            }
        };

        Ok(variants)
    }

    /// Declared bandwidth for variants derived from `source`.
    pub fn bandwidth(&self, source: &ProbeStream) -> u64 {
        parse_bandwidth(&source.bit_rate).unwrap_or(self.config.fallback_bandwidth)
    }

    fn plan_or_skip(&self, ordinal: usize, input: &ProbeData) -> Vec<VideoVariant> {
        match self.plan_input(ordinal, input) {
            Ok(variants) => variants,
            Err(e) => {
                tracing::debug!(input = ordinal, "Skipping input: {e}");
                Vec::new()
            }
        }
    }

    fn pass_through(
        &self,
        stream: StreamRef,
        source: &ProbeStream,
        bandwidth: u64,
    ) -> VideoVariant {
        VideoVariant::pass_through(
            stream,
            Resolution::new(source.width, source.height),
            bandwidth,
        )
    }

    fn reencode(&self, stream: StreamRef, source: &ProbeStream, bandwidth: u64) -> VideoVariant {
        let mut settings = Reencode::new(self.config.encoder.clone(), self.config.crf);
        if let Some(ref profile) = self.config.encoder_profile {
            settings = settings.with_profile(profile.clone());
        }
        if let Some(ref bitrate) = self.config.bitrate {
            settings = settings.with_bitrate(bitrate.clone());
        }

        VideoVariant::reencode(stream, settings, self.ratio.compute(source), bandwidth)
    }
}

/// Plan variants for `inputs` with the default planner configuration.
pub fn suggest_video_variants(inputs: &[ProbeData]) -> Vec<VideoVariant> {
    VariantPlanner::default().plan(inputs)
}
