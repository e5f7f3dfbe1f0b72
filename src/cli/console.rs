//! Line-based console over any reader/writer pair, with English text.

use std::io::{BufRead, Write};

use tracing::warn;

use number_guess::{Console, Feedback, FeedbackTokens, InputClosed, Message, Party, Prompt};

/// Console reading lines from `input` and writing text to `output`.
pub struct StdConsole<I, O> {
    input: I,
    output: O,
    tokens: FeedbackTokens,
}

impl<I: BufRead, O: Write> StdConsole<I, O> {
    pub fn new(input: I, output: O, tokens: FeedbackTokens) -> Self {
        Self {
            input,
            output,
            tokens,
        }
    }

    fn emit(&mut self, text: &str, newline: bool) {
        let result = if newline {
            writeln!(self.output, "{text}")
        } else {
            write!(self.output, "{text}")
        };
        if let Err(e) = result.and_then(|()| self.output.flush()) {
            warn!(error = %e, "Failed to write to console");
        }
    }

    #[cfg(test)]
    fn into_output(self) -> O {
        self.output
    }
}

impl<I: BufRead, O: Write> Console for StdConsole<I, O> {
    fn read_line(&mut self, prompt: &Prompt) -> Result<String, InputClosed> {
        let text = render_prompt(prompt, &self.tokens);
        self.emit(&text, false);

        let mut line = Vec::new();
        match self.input.read_until(b'\n', &mut line) {
            Ok(0) => Err(InputClosed),
            Ok(_) => {
                let text = String::from_utf8_lossy(&line);
                Ok(text.trim_end_matches(['\r', '\n']).to_string())
            }
            Err(e) => {
                warn!(error = %e, "Failed to read from console");
                Err(InputClosed)
            }
        }
    }

    fn show(&mut self, message: &Message) {
        let text = render_message(message);
        self.emit(&text, true);
    }
}

/// Text shown before reading a line.
pub fn render_prompt(prompt: &Prompt, tokens: &FeedbackTokens) -> String {
    match prompt {
        Prompt::PlayerName => "Enter your name: ".to_string(),
        Prompt::SeatName { seat } => format!("Name of player {seat}: "),
        Prompt::Menu => "Choose a mode:\n\
             1. You guess (single)\n\
             2. The computer guesses (reverse)\n\
             3. Mixed game (you vs. the computer)\n\
             4. Three players\n\
             0. Quit\n> "
            .to_string(),
        Prompt::Difficulty => "Choose a difficulty:\n\
             1. Easy (0-100)\n\
             2. Normal (0-10 000)\n\
             3. Hard (0-1 000 000)\n> "
            .to_string(),
        Prompt::Guess {
            attempt,
            max_attempts,
        } => format!("Your guess {attempt}/{max_attempts}: "),
        Prompt::SeatGuess {
            player,
            attempt,
            max_attempts,
        } => format!("{player}, guess {attempt}/{max_attempts}: "),
        Prompt::Feedback {
            guess,
            attempt,
            max_attempts,
        } => format!(
            "My guess {attempt}/{max_attempts}: {guess}\n\
             Answer '{}' (higher), '{}' (lower), '{}' (hit): ",
            tokens.higher, tokens.lower, tokens.hit
        ),
    }
}

/// Text for a message.
pub fn render_message(message: &Message) -> String {
    match message {
        Message::Welcome => "Welcome to 'Guess the number'!".to_string(),
        Message::Goodbye => "Thanks for playing!".to_string(),
        Message::EmptyName => "The name cannot be empty.".to_string(),
        Message::UnknownMode => "Unknown mode, choose 1, 2, 3, 4 or 0.".to_string(),
        Message::UnknownDifficulty => "Invalid choice. Choose 1, 2 or 3.".to_string(),
        Message::NotANumber => "Enter a number.".to_string(),
        Message::OutOfRange { bounds } => format!("The number must be within {bounds}."),
        Message::InvalidFeedback => "Invalid answer.".to_string(),
        Message::Miss { feedback } => match feedback {
            Feedback::TooHigh => "Too high!".to_string(),
            Feedback::TooLow => "Too low!".to_string(),
            Feedback::Hit => "Hit!".to_string(),
        },
        Message::ThinkOfNumber { bounds } => {
            format!("Think of a number from {} to {}, and I will guess it.", bounds.min, bounds.max)
        }
        Message::BestScore {
            mode,
            difficulty,
            best,
        } => match best {
            Some(best) => format!("Best {mode} score on {difficulty}: {best} attempts."),
            None => format!("No {mode} score on {difficulty} yet."),
        },
        Message::Guessed { attempts } => format!("Guessed in {attempts} attempts!"),
        Message::NewBest { attempts } => format!("New best score: {attempts}!"),
        Message::NotGuessed => "You did not guess the number.".to_string(),
        Message::ComputerFailed => "The computer did not guess your number.".to_string(),
        Message::MixedStats { difficulty, stats } => format!(
            "Your wins/losses on {difficulty}: {}/{}",
            stats.wins, stats.losses
        ),
        Message::Starts { party } => match party {
            Party::Human => "You start!".to_string(),
            Party::Computer => "The computer starts!".to_string(),
        },
        Message::PartyWon { party, attempts } => match party {
            Party::Human => format!("You won in {attempts} attempts!"),
            Party::Computer => format!("The computer won in {attempts} attempts!"),
        },
        Message::NoWinner => "Nobody won within the attempt limit.".to_string(),
        Message::SeatWon { player, attempts } => {
            format!("{player} won in {attempts} attempts!")
        }
        Message::NobodyGuessed { target } => {
            format!("Nobody guessed it. The number was {target}.")
        }
        Message::SaveFailed { reason } => format!("Could not save the result: {reason}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use number_guess::{Bounds, Player};

    #[test]
    fn test_read_line_strips_newline() {
        let input: &[u8] = b"ala\r\n42\n";
        let mut console = StdConsole::new(input, Vec::new(), FeedbackTokens::default());

        assert_eq!(console.read_line(&Prompt::PlayerName).unwrap(), "ala");
        assert_eq!(console.read_line(&Prompt::Menu).unwrap(), "42");
        assert_eq!(console.read_line(&Prompt::Menu), Err(InputClosed));
    }

    #[test]
    fn test_read_line_survives_invalid_utf8() {
        let input: &[u8] = b"\xc5ukasz\n42\n";
        let mut console = StdConsole::new(input, Vec::new(), FeedbackTokens::default());

        assert_eq!(console.read_line(&Prompt::PlayerName).unwrap(), "\u{FFFD}ukasz");
        assert_eq!(console.read_line(&Prompt::Menu).unwrap(), "42");
        assert_eq!(console.read_line(&Prompt::Menu), Err(InputClosed));
    }

    #[test]
    fn test_output_contains_prompts_and_messages() {
        let input: &[u8] = b"x\n";
        let mut console = StdConsole::new(input, Vec::new(), FeedbackTokens::default());
        console.read_line(&Prompt::PlayerName).unwrap();
        console.show(&Message::Welcome);

        let text = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(text, "Enter your name: Welcome to 'Guess the number'!\n");
    }

    #[test]
    fn test_feedback_prompt_uses_configured_tokens() {
        let tokens = FeedbackTokens {
            higher: "up".to_string(),
            lower: "down".to_string(),
            hit: "yes".to_string(),
        };
        let text = render_prompt(
            &Prompt::Feedback {
                guess: 50,
                attempt: 1,
                max_attempts: 10,
            },
            &tokens,
        );
        assert!(text.contains("50"));
        assert!(text.contains("'up'"));
        assert!(text.contains("'down'"));
        assert!(text.contains("'yes'"));
    }

    #[test]
    fn test_render_messages() {
        assert_eq!(
            render_message(&Message::OutOfRange {
                bounds: Bounds::new(0, 100)
            }),
            "The number must be within 0-100."
        );
        assert_eq!(
            render_message(&Message::SeatWon {
                player: Player::new("Bob").unwrap(),
                attempts: 2
            }),
            "Bob won in 2 attempts!"
        );
        assert_eq!(
            render_message(&Message::BestScore {
                mode: number_guess::Mode::Single,
                difficulty: number_guess::Difficulty::Easy,
                best: None
            }),
            "No single score on easy yet."
        );
    }
}
