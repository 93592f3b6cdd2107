use std::time::Duration;

use crate::game::game::Game;
use crate::game::state::{GameState, Winner};

#[derive(Debug, Default, Clone)]
pub struct SimulationStats {
    pub games: u32,
    pub player_wins: u32,
    /// Games where the player reached the bank in the chase.
    pub chase_wins: u32,
    pub caught: u32,
    pub total_correct_answers: u64,
    /// Cash taken home, summed over won games.
    pub total_banked: u64,
    pub total_duration: Duration,
}

impl SimulationStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_state(&mut self, state: &GameState, duration: Duration) {
        self.games += 1;
        self.total_duration += duration;
        self.total_correct_answers += u64::from(state.player.correct_answers);

        if state.player.has_banked() {
            self.chase_wins += 1;
        }
        match state.winner() {
            Some(Winner::Player) => {
                self.player_wins += 1;
                self.total_banked += u64::from(state.player.secured_cash);
            }
            Some(Winner::Chaser) if !state.player.has_banked() => self.caught += 1,
            _ => {}
        }
    }

    fn rate(&self, count: u32) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        count as f64 / self.games as f64 * 100.0
    }

    pub fn win_rate(&self) -> f64 {
        self.rate(self.player_wins)
    }

    pub fn caught_rate(&self) -> f64 {
        self.rate(self.caught)
    }

    pub fn get_avg_banked(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_banked as f64 / self.games as f64
    }

    pub fn get_avg_correct(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_correct_answers as f64 / self.games as f64
    }

    pub fn get_avg_duration(&self) -> Duration {
        if self.games == 0 {
            return Duration::ZERO;
        }
        self.total_duration / self.games
    }
}

#[derive(Debug, Default)]
pub struct StatisticsAccumulator {
    pub stats: SimulationStats,
}

impl StatisticsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn after<O>(&mut self, game: &Game<O>, duration: Duration) {
        self.stats.record_state(&game.state, duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::state::GamePhase;
    use crate::questions::fixtures;

    fn finished(winner: Winner, banked: bool, cash: u32) -> GameState {
        let mut state = GameState::new(fixtures::pool(1), GameConfig::default());
        state.player.board_position = Some(if banked { 0 } else { 3 });
        state.player.correct_answers = 4;
        state.player.secured_cash = cash;
        state.phase = GamePhase::Completed { winner };
        state
    }

    #[test]
    fn outcomes_are_classified() {
        let mut stats = SimulationStats::new();
        stats.record_state(&finished(Winner::Player, true, 8000), Duration::from_millis(2));
        stats.record_state(&finished(Winner::Chaser, true, 0), Duration::from_millis(2));
        stats.record_state(&finished(Winner::Chaser, false, 0), Duration::from_millis(2));

        assert_eq!(stats.games, 3);
        assert_eq!(stats.player_wins, 1);
        assert_eq!(stats.chase_wins, 2);
        assert_eq!(stats.caught, 1);
        assert_eq!(stats.total_banked, 8000);
        assert_eq!(stats.get_avg_correct(), 4.0);
        assert_eq!(stats.get_avg_duration(), Duration::from_millis(2));
    }

    #[test]
    fn rates_are_shares_of_all_games() {
        let mut stats = SimulationStats::new();
        stats.record_state(&finished(Winner::Player, true, 1000), Duration::ZERO);
        stats.record_state(&finished(Winner::Chaser, false, 0), Duration::ZERO);
        assert_eq!(stats.games, 2);
        assert_eq!(stats.win_rate(), 50.0);
        assert_eq!(stats.caught_rate(), 50.0);
        assert_eq!(stats.get_avg_banked(), 500.0);
    }

    #[test]
    fn empty_stats_have_zero_rates() {
        let stats = SimulationStats::new();
        assert_eq!(stats.win_rate(), 0.0);
        assert_eq!(stats.get_avg_banked(), 0.0);
    }
}
