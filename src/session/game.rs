//! The interactive session: name, menu, difficulty, rounds, records.

use tracing::{info, instrument, warn};

use crate::core::{
    Difficulty, GameConfig, InputClosed, MenuChoice, Mode, Player, PlayerMap, RandomSource,
    RecordError,
};
use crate::records::{record_mixed, update_best, BestUpdate, RecordStore};
use crate::rounds::{
    play_forward, play_mixed, play_multiplayer, play_reverse, Console, Message, MixedOutcome,
    MultiplayerOutcome, Prompt, RoundOutcome,
};

/// Counts of what a session did, for logging and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds_played: u32,
    pub save_failures: u32,
}

/// One player's sitting at the game.
pub struct GameSession<C, R, S> {
    config: GameConfig,
    console: C,
    rng: R,
    store: S,
    summary: SessionSummary,
}

impl<C, R, S> GameSession<C, R, S>
where
    C: Console,
    R: RandomSource,
    S: RecordStore,
{
    pub fn new(config: GameConfig, console: C, rng: R, store: S) -> Self {
        Self {
            config,
            console,
            rng,
            store,
            summary: SessionSummary::default(),
        }
    }

    #[must_use]
    pub fn console(&self) -> &C {
        &self.console
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run until the player quits or the input closes.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> SessionSummary {
        self.console.show(&Message::Welcome);
        match self.run_until_quit() {
            Ok(()) => info!("Player quit"),
            Err(InputClosed) => info!("Input closed, ending session"),
        }
        self.console.show(&Message::Goodbye);
        self.summary
    }

    fn run_until_quit(&mut self) -> Result<(), InputClosed> {
        let player = self.acquire_name(Prompt::PlayerName)?;
        info!(player = %player, "Session started");

        loop {
            let line = self.console.read_line(&Prompt::Menu)?;
            let mode = match MenuChoice::parse(&line) {
                Some(MenuChoice::Quit) => return Ok(()),
                Some(MenuChoice::Play(mode)) => mode,
                None => {
                    self.console.show(&Message::UnknownMode);
                    continue;
                }
            };
            let difficulty = self.choose_difficulty()?;
            self.play(&player, mode, difficulty)?;
            self.summary.rounds_played += 1;
        }
    }

    /// Play one round of `mode` for `player` and update its records.
    #[instrument(skip(self))]
    pub fn play(
        &mut self,
        player: &Player,
        mode: Mode,
        difficulty: Difficulty,
    ) -> Result<(), InputClosed> {
        match mode {
            Mode::Single => self.play_single(player, difficulty),
            Mode::Reverse => self.play_reverse(player, difficulty),
            Mode::Mixed => self.play_mixed(player, difficulty),
            Mode::MultiPlayer => self.play_multiplayer(player, difficulty),
        }
    }

    fn acquire_name(&mut self, prompt: Prompt) -> Result<Player, InputClosed> {
        loop {
            let line = self.console.read_line(&prompt)?;
            match Player::new(&line) {
                Some(player) => return Ok(player),
                None => self.console.show(&Message::EmptyName),
            }
        }
    }

    fn choose_difficulty(&mut self) -> Result<Difficulty, InputClosed> {
        loop {
            let line = self.console.read_line(&Prompt::Difficulty)?;
            match Difficulty::from_choice(&line) {
                Some(difficulty) => return Ok(difficulty),
                None => self.console.show(&Message::UnknownDifficulty),
            }
        }
    }

    fn play_single(&mut self, player: &Player, difficulty: Difficulty) -> Result<(), InputClosed> {
        self.show_best(player, Mode::Single, difficulty);
        let outcome = play_forward(
            difficulty.bounds(),
            self.config.max_attempts,
            &mut self.rng,
            &mut self.console,
        )?;
        match outcome {
            RoundOutcome::Hit { attempts } => {
                self.record_best(player, Mode::Single, difficulty, attempts);
            }
            RoundOutcome::Exhausted => self.console.show(&Message::NotGuessed),
        }
        Ok(())
    }

    fn play_reverse(&mut self, player: &Player, difficulty: Difficulty) -> Result<(), InputClosed> {
        self.show_best(player, Mode::Reverse, difficulty);
        let outcome = play_reverse(
            difficulty.bounds(),
            self.config.max_attempts,
            &self.config.feedback_tokens,
            &mut self.console,
        )?;
        match outcome {
            RoundOutcome::Hit { attempts } => {
                self.record_best(player, Mode::Reverse, difficulty, attempts);
            }
            RoundOutcome::Exhausted => self.console.show(&Message::ComputerFailed),
        }
        Ok(())
    }

    fn play_mixed(&mut self, player: &Player, difficulty: Difficulty) -> Result<(), InputClosed> {
        let stats = self.store.load_stats(player, difficulty);
        self.console.show(&Message::MixedStats { difficulty, stats });

        let outcome = play_mixed(
            difficulty.bounds(),
            self.config.max_attempts,
            &self.config.feedback_tokens,
            &mut self.rng,
            &mut self.console,
        )?;
        match outcome {
            MixedOutcome::Won { winner, attempts } => {
                self.console.show(&Message::PartyWon { party: winner, attempts });
            }
            MixedOutcome::NoWinner => self.console.show(&Message::NoWinner),
        }

        if let Err(err) = record_mixed(&mut self.store, player, difficulty, outcome) {
            self.report_save_failure(&err);
        }
        Ok(())
    }

    fn play_multiplayer(
        &mut self,
        player: &Player,
        difficulty: Difficulty,
    ) -> Result<(), InputClosed> {
        let seats = self.config.multiplayer_seats;
        let mut players = Vec::with_capacity(seats);
        players.push(player.clone());
        for seat in 2..=seats {
            players.push(self.acquire_name(Prompt::SeatName { seat })?);
        }
        let players = PlayerMap::from_vec(players);

        let outcome = play_multiplayer(
            difficulty.bounds(),
            self.config.max_attempts,
            &players,
            &mut self.rng,
            &mut self.console,
        )?;
        match outcome {
            MultiplayerOutcome::Winner { seat, attempts } => {
                self.console.show(&Message::SeatWon {
                    player: players[seat].clone(),
                    attempts,
                });
            }
            MultiplayerOutcome::NoWinner { target } => {
                self.console.show(&Message::NobodyGuessed { target });
            }
        }
        Ok(())
    }

    fn show_best(&mut self, player: &Player, mode: Mode, difficulty: Difficulty) {
        let best = self.store.load_best(player, mode, difficulty);
        self.console.show(&Message::BestScore { mode, difficulty, best });
    }

    fn record_best(&mut self, player: &Player, mode: Mode, difficulty: Difficulty, attempts: u32) {
        self.console.show(&Message::Guessed { attempts });
        match update_best(&mut self.store, player, mode, difficulty, attempts) {
            Ok(BestUpdate::NewBest { .. }) => self.console.show(&Message::NewBest { attempts }),
            Ok(BestUpdate::Kept { .. }) => {}
            Err(err) => self.report_save_failure(&err),
        }
    }

    fn report_save_failure(&mut self, err: &RecordError) {
        warn!(error = %err, "Failed to save record");
        self.summary.save_failures += 1;
        self.console.show(&Message::SaveFailed {
            reason: err.message.clone(),
        });
    }
}
