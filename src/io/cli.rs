//! Command-line interface for generating, previewing and surveying dungeons

use crate::algorithm::generator::{DungeonGenerator, GeneratedDungeon, GeneratorConfig};
use crate::analysis::statistics::{LayoutStatistics, SurveyStatistics};
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_MAX_ROOM_SIZE, DEFAULT_MIN_PARTITION_SIZE, DEFAULT_MIN_ROOM_SIZE,
    DEFAULT_SEED, DEFAULT_SURVEY_COUNT, DEFAULT_WIDTH,
};
use crate::io::error::{DungeonError, Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "bspdungeon")]
#[command(
    author,
    version,
    about = "Generate BSP dungeons and audit their connectivity"
)]
/// Command-line arguments for the dungeon generator
pub struct Cli {
    /// Grid width in tiles
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Grid height in tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Random seed; survey mode uses consecutive seeds starting here
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Minimum partition edge before splitting stops
    #[arg(long, default_value_t = DEFAULT_MIN_PARTITION_SIZE)]
    pub min_partition: i32,

    /// Smallest room edge
    #[arg(long, default_value_t = DEFAULT_MIN_ROOM_SIZE)]
    pub min_room: i32,

    /// Largest room edge
    #[arg(long, default_value_t = DEFAULT_MAX_ROOM_SIZE)]
    pub max_room: i32,

    /// Number of layouts to generate and audit
    #[arg(short = 'n', long, default_value_t = DEFAULT_SURVEY_COUNT)]
    pub count: usize,

    /// Spawn searches to run against each layout
    #[arg(long, default_value_t = 0)]
    pub spawns: usize,

    /// Print the layout as text (single layout only)
    #[arg(short, long)]
    pub preview: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Generator parameters named on the command line
    pub const fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            min_partition_size: self.min_partition,
            min_room_size: self.min_room,
            max_room_size: self.max_room,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && self.count > 1
    }

    /// Check argument combinations clap cannot express
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the count is zero, a preview is requested
    /// for more than one layout, or the generator parameters are invalid
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.count,
                &"must be at least 1",
            ));
        }
        if self.preview && self.count > 1 {
            return Err(invalid_parameter(
                "preview",
                &self.count,
                &"previews are only available for a single layout",
            ));
        }
        self.generator_config().validate()
    }
}

/// Runs the generate-measure-audit loop described by a [`Cli`]
pub struct DungeonRunner {
    cli: Cli,
    survey: SurveyStatistics,
}

impl DungeonRunner {
    /// Create a runner for the given arguments
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            survey: SurveyStatistics::new(),
        }
    }

    /// Totals gathered so far
    pub const fn survey(&self) -> &SurveyStatistics {
        &self.survey
    }

    /// Generate, measure and audit every requested layout
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid or any layout is
    /// disconnected
    pub fn process(&mut self) -> Result<()> {
        self.cli.validate()?;
        let config = self.cli.generator_config();

        let mut progress = if self.cli.should_show_progress() {
            ProgressManager::new(self.cli.count)
        } else {
            ProgressManager::hidden(self.cli.count)
        };

        let mut first_failure = None;
        for seed in self.seeds() {
            let dungeon = DungeonGenerator::with_config(seed, config)?
                .generate_dungeon(self.cli.width, self.cli.height);
            let layout = LayoutStatistics::measure(seed, &dungeon);

            self.run_spawns(seed, &dungeon);
            self.survey.record(&layout);
            progress.complete_layout(&layout);

            if self.cli.count == 1 {
                info!("{layout}");
            }
            if self.cli.preview {
                Self::print_preview(&dungeon);
            }
            if !layout.connected && first_failure.is_none() {
                first_failure = Some(DungeonError::DisconnectedLayout {
                    seed,
                    regions: layout.regions,
                });
            }
        }

        progress.finish();
        if self.cli.count > 1 || self.survey.spawn_count() > 0 {
            for line in self.survey.to_string().lines() {
                info!("{line}");
            }
        }

        first_failure.map_or(Ok(()), Err)
    }

    fn seeds(&self) -> impl Iterator<Item = u64> + use<> {
        let start = self.cli.seed;
        (0..self.cli.count as u64).map(move |offset| start.wrapping_add(offset))
    }

    fn run_spawns(&mut self, seed: u64, dungeon: &GeneratedDungeon) {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..self.cli.spawns {
            let spawn = dungeon.grid.locate_spawn(&mut rng);
            self.survey.record_spawn(spawn.phase);
        }
    }

    // Allow print for the requested text preview
    #[allow(clippy::print_stdout)]
    fn print_preview(dungeon: &GeneratedDungeon) {
        print!("{}", dungeon.grid);
    }
}
