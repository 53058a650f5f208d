use crate::{player_on_side, MatchSetup, MatchState, Params, PlayerId, Side, Stats};

/// Points within a game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointScore {
    #[default]
    Love,
    Fifteen,
    Thirty,
    Forty,
    Advantage,
    Game,
}

impl PointScore {
    /// Score after winning a point. Once both players reach forty a point
    /// at forty gives advantage instead of the game.
    pub fn next(self, deuce_mode: bool) -> Self {
        match self {
            PointScore::Love => PointScore::Fifteen,
            PointScore::Fifteen => PointScore::Thirty,
            PointScore::Thirty => PointScore::Forty,
            PointScore::Forty if deuce_mode => PointScore::Advantage,
            PointScore::Forty | PointScore::Advantage | PointScore::Game => PointScore::Game,
        }
    }

    fn at_forty_or_better(self) -> bool {
        matches!(self, PointScore::Forty | PointScore::Advantage)
    }
}

/// What is riding on the next point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointType {
    #[default]
    Normal,
    Deuce,
    GamePoint,
    BreakPoint,
    SetPoint,
    BreakSetPoint,
    MatchPoint,
    BreakMatchPoint,
    Tiebreak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WinKind {
    Game,
    Set,
    Match,
}

/// Something worth telling the players after a point
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Announcement {
    WinGame { kind: WinKind, player: PlayerId },
    SwitchEnds,
    DeuceCount { count: u32 },
    WinStreak { player: PlayerId, streak: u32 },
    Ace { speed: f32 },
    LongRally { length: u32 },
}

/// One finished point
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rally {
    pub winner: PlayerId,
    /// What was riding on the point when it was played
    pub point_type: PointType,
    pub stats: Stats,
}

/// Format of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchRules {
    pub number_of_sets: u32,
    pub set_length: u32,
    /// Play a tiebreak at games all in the deciding set as well
    pub tiebreak_last_set: bool,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            number_of_sets: Params::NUMBER_OF_SETS,
            set_length: Params::SET_LENGTH,
            tiebreak_last_set: false,
        }
    }
}

/// Tennis-style score across the points of a match.
///
/// Each decided point feeds [`MatchScore::point_won`], which moves the
/// game, set and tiebreak counters on and works out who serves next and
/// which ends the players occupy. [`MatchScore::apply`] carries that onto
/// a [`MatchState`] ahead of `reset_point`.
///
/// Per-player arrays are indexed by [`PlayerId::index`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchScore {
    pub rules: MatchRules,
    /// Games of every finished set
    pub sets: Vec<[u32; 2]>,
    pub games: [u32; 2],
    pub tiebreak: [u32; 2],
    pub points: [PointScore; 2],
    pub rallies: Vec<Rally>,
    pub winner: Option<PlayerId>,
    pub server: PlayerId,
    pub positions_reversed: bool,
    pub point_type: PointType,
    /// Announcements raised by the latest point only
    pub announcements: Vec<Announcement>,
}

impl Default for MatchScore {
    fn default() -> Self {
        Self::new(MatchRules::default())
    }
}

impl MatchScore {
    pub fn new(rules: MatchRules) -> Self {
        Self {
            rules,
            sets: Vec::new(),
            games: [0; 2],
            tiebreak: [0; 2],
            points: [PointScore::Love; 2],
            rallies: Vec::new(),
            winner: None,
            server: PlayerId::One,
            positions_reversed: false,
            point_type: PointType::Normal,
            announcements: Vec::new(),
        }
    }

    /// Setup for a new match state tracking `player`
    pub fn setup(&self, player: PlayerId) -> MatchSetup {
        MatchSetup {
            server: self.server,
            positions_reversed: self.positions_reversed,
            player,
            opponent: player.other(),
        }
    }

    /// Carry the next server and ends onto `state`. Call `reset_point` after.
    pub fn apply(&self, state: &mut MatchState) {
        state.server = self.server;
        state.positions_reversed = self.positions_reversed;
    }

    /// Score the point if one was decided on the latest tick. Returns the
    /// point's winner.
    pub fn record_point(&mut self, state: &MatchState) -> Option<PlayerId> {
        if self.is_over() {
            return None;
        }
        let conceded = if state.events.left_conceded {
            Side::Left
        } else if state.events.right_conceded {
            Side::Right
        } else {
            return None;
        };

        let winner = state.player_on(conceded.opposite());
        self.point_won(winner, state.stats);
        Some(winner)
    }

    /// Score a point conceded by whoever stands on `side`
    pub fn point_conceded(&mut self, side: Side, stats: Stats) {
        self.point_won_by_side(side.opposite(), stats);
    }

    /// Score a point won by whoever stands on `side`
    pub fn point_won_by_side(&mut self, side: Side, stats: Stats) {
        self.point_won(player_on_side(side, self.positions_reversed), stats);
    }

    pub fn point_won(&mut self, player: PlayerId, stats: Stats) {
        if self.is_over() {
            return;
        }
        self.announcements.clear();
        self.rallies.push(Rally {
            winner: player,
            point_type: self.point_type,
            stats,
        });

        if self.is_tiebreak() {
            self.tiebreak_point_won(player);
        } else {
            self.game_point_won(player);
        }
    }

    fn tiebreak_point_won(&mut self, player: PlayerId) {
        if self.is_tiebreak_set_point(player) {
            let mut final_set = self.games;
            final_set[player.index()] += 1;
            self.sets.push(final_set);
            self.games = [0; 2];
            self.tiebreak = [0; 2];
            self.points = [PointScore::Love; 2];

            // The first server of the next set follows the games played
            self.server = if self.games_played() % 2 == 0 {
                PlayerId::One
            } else {
                PlayerId::Two
            };
            self.finish_set(player);
            self.after_point();
            self.switch_ends_if_needed();
            return;
        }

        let played = self.tiebreak[0] + self.tiebreak[1] + 1;
        self.tiebreak[player.index()] += 1;
        if (played - 1) % 2 == 0 {
            self.server = self.server.other();
        }
        if played % Params::TIEBREAK_END_CHANGE_INTERVAL == 0 {
            self.switch_ends();
        }
        self.after_point();
    }

    fn game_point_won(&mut self, player: PlayerId) {
        let (p, o) = (player.index(), player.other().index());

        if self.points[o] == PointScore::Advantage {
            self.points[o] = PointScore::Forty;
            self.after_point();
            return;
        }
        if self.is_deuce() {
            self.points[p] = PointScore::Advantage;
            self.after_point();
            return;
        }

        let deuce_mode = self.points[p].at_forty_or_better() && self.points[o].at_forty_or_better();
        let next = self.points[p].next(deuce_mode);
        if next != PointScore::Game {
            self.points[p] = next;
            self.after_point();
            return;
        }

        self.games[p] += 1;
        self.points = [PointScore::Love; 2];
        self.server = self.server.other();

        if self.games[p] >= self.rules.set_length && self.games[p] >= self.games[o] + 2 {
            self.sets.push(self.games);
            self.games = [0; 2];
            self.finish_set(player);
        } else {
            log::debug!("{player} wins the game, {}-{}", self.games[0], self.games[1]);
            self.announcements.push(Announcement::WinGame {
                kind: WinKind::Game,
                player,
            });
        }
        self.after_point();
        self.switch_ends_if_needed();
    }

    fn finish_set(&mut self, player: PlayerId) {
        let kind = if self.sets_won(player) >= self.sets_to_win() {
            self.winner = Some(player);
            WinKind::Match
        } else {
            WinKind::Set
        };
        log::info!("{player} wins the {kind:?}, sets {:?}", self.sets);
        self.announcements.push(Announcement::WinGame { kind, player });
    }

    fn after_point(&mut self) {
        self.point_type = self.classify_point();
        self.add_rally_announcements();
    }

    fn switch_ends(&mut self) {
        self.positions_reversed = !self.positions_reversed;
        self.announcements.push(Announcement::SwitchEnds);
        log::debug!("Ends switched, reversed={}", self.positions_reversed);
    }

    /// Ends change after the first game and every two games after that
    fn switch_ends_if_needed(&mut self) {
        if self.games_played() % 2 == 1 {
            self.switch_ends();
        }
    }

    fn add_rally_announcements(&mut self) {
        let Some((latest, previous)) = self.rallies.split_last() else {
            return;
        };
        let length = latest.stats.rally_length;
        let serve_speed = latest.stats.serve_speed;
        let previous_best = previous
            .iter()
            .map(|rally| rally.stats.rally_length)
            .max()
            .unwrap_or(0);

        let count = self.deuce_count();
        if count >= Params::DEUCE_COUNT_ANNOUNCEMENT_THRESHOLD {
            self.announcements.push(Announcement::DeuceCount { count });
        }
        if let Some((player, streak)) = self.win_streak() {
            if streak % Params::WIN_STREAK_ANNOUNCEMENT_INTERVAL == 0 {
                self.announcements
                    .push(Announcement::WinStreak { player, streak });
            }
        }
        if length == 1 {
            self.announcements.push(Announcement::Ace { speed: serve_speed });
        }
        if length >= Params::LONG_RALLY_ANNOUNCEMENT_THRESHOLD && length > previous_best {
            self.announcements.push(Announcement::LongRally { length });
        }
    }

    fn classify_point(&self) -> PointType {
        let tiebreak = self.is_tiebreak();
        let deciding = self.rules.number_of_sets / 2;

        for player in PlayerId::ALL {
            let (p, o) = (player.index(), player.other().index());
            let serving = self.server == player;
            let for_match = self.sets_won(player) == deciding;

            if tiebreak && self.is_tiebreak_set_point(player) {
                return set_or_match_point(for_match, serving);
            }
            if self.is_deuce() {
                return PointType::Deuce;
            }
            if is_game_point(self.points[p], self.points[o]) {
                let for_set =
                    self.games[p] + 1 >= self.rules.set_length && self.games[p] > self.games[o];
                return match (for_set, serving) {
                    (true, _) => set_or_match_point(for_match, serving),
                    (false, true) => PointType::GamePoint,
                    (false, false) => PointType::BreakPoint,
                };
            }
        }

        if tiebreak {
            PointType::Tiebreak
        } else {
            PointType::Normal
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn is_deuce(&self) -> bool {
        self.points == [PointScore::Forty; 2]
    }

    /// Games all at set length, outside the deciding set unless the rules
    /// ask for a tiebreak there too
    pub fn is_tiebreak(&self) -> bool {
        let length = self.rules.set_length;
        let deciding_set = self.sets.len() as u32 + 1 >= self.rules.number_of_sets;
        self.games == [length; 2] && (!deciding_set || self.rules.tiebreak_last_set)
    }

    fn is_tiebreak_set_point(&self, player: PlayerId) -> bool {
        let (p, o) = (player.index(), player.other().index());
        self.tiebreak[p] + 1 >= Params::TIEBREAK_POINTS && self.tiebreak[p] > self.tiebreak[o]
    }

    pub fn sets_won(&self, player: PlayerId) -> u32 {
        let (p, o) = (player.index(), player.other().index());
        self.sets.iter().filter(|set| set[p] > set[o]).count() as u32
    }

    pub fn sets_to_win(&self) -> u32 {
        self.rules.number_of_sets.div_ceil(2)
    }

    /// Games played across the match, the current set included
    pub fn games_played(&self) -> u32 {
        self.sets.iter().chain([&self.games]).map(|set| set[0] + set[1]).sum()
    }

    /// Deuces in a row, counting the current one. Zero when not at deuce.
    pub fn deuce_count(&self) -> u32 {
        if self.point_type != PointType::Deuce {
            return 0;
        }
        let earlier = self
            .rallies
            .iter()
            .rev()
            .skip(1)
            .step_by(2)
            .take_while(|rally| rally.point_type == PointType::Deuce)
            .count();
        1 + earlier as u32
    }

    /// Latest winner and how many points in a row they have taken
    pub fn win_streak(&self) -> Option<(PlayerId, u32)> {
        let winner = self.rallies.last()?.winner;
        let streak = self
            .rallies
            .iter()
            .rev()
            .take_while(|rally| rally.winner == winner)
            .count();
        Some((winner, streak as u32))
    }
}

fn is_game_point(own: PointScore, other: PointScore) -> bool {
    match own {
        PointScore::Forty => !other.at_forty_or_better(),
        PointScore::Advantage => other == PointScore::Forty,
        _ => false,
    }
}

fn set_or_match_point(for_match: bool, serving: bool) -> PointType {
    match (for_match, serving) {
        (true, true) => PointType::MatchPoint,
        (true, false) => PointType::BreakMatchPoint,
        (false, true) => PointType::SetPoint,
        (false, false) => PointType::BreakSetPoint,
    }
}
