//! エネルギー型マッチングエンジン
//!
//! 「型Tの出力は型Tの入力にしか接続できない」というルールを教えるミニゲーム。
//! 状態（[`MatchState`]）は呼び出し側が所有し、操作はすべて純粋な状態遷移として
//! 実装する。描画側は遷移後の状態だけを見て再描画すればよい。
//!
//! エラー表示の自動消去はタイマー効果（[`TimerEffect`]）として返すので、
//! 実際のタイマーはフロントエンドが管理する。

use crate::catalog::Catalog;
use crate::timer::ClearTicket;
use serde::Serialize;
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::debug;

/// ユーザー向けの一時エラー（致命的ではない）
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchError {
    #[error("Select a source (Left) energy type first.")]
    NoSourceSelected,

    #[error("Incompatible Energy! Structural Failure imminent.")]
    IncompatibleMatch,
}

/// 導出される画面状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchPhase {
    Empty,
    SourceSelected,
    ErrorShown,
    Complete,
}

/// ユーザー操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchAction {
    SelectSource(String),
    SelectTarget(String),
    Reset,
    /// タイマー発火によるエラー消去
    ClearError(ClearTicket),
}

/// 状態遷移に伴ってフロントエンドが行うタイマー操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEffect {
    None,
    /// 保留中のタイマーを置き換えて、この番号で消去を予約する
    Schedule(ClearTicket),
    /// 保留中のタイマーをキャンセルする
    Cancel,
}

/// マッチングのセッション状態
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchState {
    selected_source: Option<String>,
    matched: BTreeSet<String>,
    transient_error: Option<MatchError>,
    /// 直近のエラーの予約番号（リセットをまたいで単調増加）
    #[serde(skip)]
    error_ticket: ClearTicket,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_source(&self) -> Option<&str> {
        self.selected_source.as_deref()
    }

    pub fn matched(&self) -> &BTreeSet<String> {
        &self.matched
    }

    pub fn is_matched(&self, name: &str) -> bool {
        self.matched.contains(name)
    }

    pub fn transient_error(&self) -> Option<MatchError> {
        self.transient_error
    }

    /// 現在のエラーの予約番号
    pub fn error_ticket(&self) -> ClearTicket {
        self.error_ticket
    }

    /// 全エントリが接続済みか
    pub fn is_complete(&self, catalog: &Catalog) -> bool {
        self.matched.len() == catalog.len()
    }

    /// (接続済み数, 全体数)
    pub fn progress(&self, catalog: &Catalog) -> (usize, usize) {
        (self.matched.len(), catalog.len())
    }

    pub fn phase(&self, catalog: &Catalog) -> MatchPhase {
        if self.is_complete(catalog) {
            MatchPhase::Complete
        } else if self.transient_error.is_some() {
            MatchPhase::ErrorShown
        } else if self.selected_source.is_some() {
            MatchPhase::SourceSelected
        } else {
            MatchPhase::Empty
        }
    }

    /// ソース（左列）を選択
    ///
    /// 接続済み・カタログ外の名前は無視する。
    pub fn select_source(&mut self, catalog: &Catalog, name: &str) -> TimerEffect {
        if !self.is_selectable(catalog, name) {
            debug!(name, "source ignored");
            return TimerEffect::None;
        }

        self.selected_source = Some(name.to_string());
        self.take_error()
    }

    /// ターゲット（右列）を選択
    pub fn select_target(&mut self, catalog: &Catalog, name: &str) -> TimerEffect {
        if !self.is_selectable(catalog, name) {
            debug!(name, "target ignored");
            return TimerEffect::None;
        }

        let Some(source) = self.selected_source.as_deref() else {
            return self.raise(MatchError::NoSourceSelected);
        };
        if source != name {
            // ソースは選択したまま（別のターゲットで再試行できる）
            return self.raise(MatchError::IncompatibleMatch);
        }

        self.matched.insert(name.to_string());
        self.selected_source = None;
        debug!(name, matched = self.matched.len(), "matched");
        self.take_error()
    }

    /// 初期状態に戻す
    pub fn reset(&mut self) -> TimerEffect {
        self.selected_source = None;
        self.matched.clear();
        self.transient_error = None;
        TimerEffect::Cancel
    }

    /// タイマー発火によるエラー消去（古い予約番号は無視）
    pub fn clear_error(&mut self, ticket: ClearTicket) -> TimerEffect {
        if ticket == self.error_ticket && self.transient_error.is_some() {
            self.transient_error = None;
        } else {
            debug!(?ticket, current = ?self.error_ticket, "stale clear ignored");
        }
        TimerEffect::None
    }

    fn is_selectable(&self, catalog: &Catalog, name: &str) -> bool {
        catalog.contains(name) && !self.matched.contains(name)
    }

    fn raise(&mut self, error: MatchError) -> TimerEffect {
        self.error_ticket = self.error_ticket.next();
        self.transient_error = Some(error);
        debug!(?error, ticket = ?self.error_ticket, "transient error");
        TimerEffect::Schedule(self.error_ticket)
    }

    fn take_error(&mut self) -> TimerEffect {
        match self.transient_error.take() {
            Some(_) => TimerEffect::Cancel,
            None => TimerEffect::None,
        }
    }
}

/// 操作を適用する単一の入口
pub fn reduce(state: &mut MatchState, catalog: &Catalog, action: MatchAction) -> TimerEffect {
    match action {
        MatchAction::SelectSource(name) => state.select_source(catalog, &name),
        MatchAction::SelectTarget(name) => state.select_target(catalog, &name),
        MatchAction::Reset => state.reset(),
        MatchAction::ClearError(ticket) => state.clear_error(ticket),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(catalog: &Catalog) -> Vec<String> {
        catalog.entries().iter().map(|e| e.name.clone()).collect()
    }

    #[test]
    fn test_correct_pair_for_every_entry() {
        let catalog = Catalog::standard();
        for name in names(&catalog) {
            let mut state = MatchState::new();
            state.select_source(&catalog, &name);
            let effect = state.select_target(&catalog, &name);

            assert!(state.is_matched(&name));
            assert_eq!(state.selected_source(), None);
            assert_eq!(state.transient_error(), None);
            assert_eq!(effect, TimerEffect::None);
        }
    }

    #[test]
    fn test_mismatch_for_every_distinct_pair() {
        let catalog = Catalog::standard();
        let all = names(&catalog);
        for a in &all {
            for b in all.iter().filter(|b| *b != a) {
                let mut state = MatchState::new();
                state.select_source(&catalog, a);
                let effect = state.select_target(&catalog, b);

                assert_eq!(state.transient_error(), Some(MatchError::IncompatibleMatch));
                assert!(state.matched().is_empty());
                assert_eq!(state.selected_source(), Some(a.as_str()));
                assert!(matches!(effect, TimerEffect::Schedule(_)));
            }
        }
    }

    #[test]
    fn test_target_without_source() {
        let catalog = Catalog::standard();
        let mut state = MatchState::new();

        let effect = state.select_target(&catalog, "LATENT");
        assert_eq!(state.transient_error(), Some(MatchError::NoSourceSelected));
        assert!(state.matched().is_empty());
        assert_eq!(effect, TimerEffect::Schedule(state.error_ticket()));
        assert_eq!(state.phase(&catalog), MatchPhase::ErrorShown);
    }

    #[test]
    fn test_select_source_idempotent() {
        let catalog = Catalog::standard();
        let mut once = MatchState::new();
        once.select_source(&catalog, "CLIP");

        let mut twice = MatchState::new();
        twice.select_source(&catalog, "CLIP");
        twice.select_source(&catalog, "CLIP");

        assert_eq!(once, twice);
        assert_eq!(once.phase(&catalog), MatchPhase::SourceSelected);
    }

    #[test]
    fn test_matched_entries_are_ignored() {
        let catalog = Catalog::standard();
        let mut state = MatchState::new();
        state.select_source(&catalog, "VAE");
        state.select_target(&catalog, "VAE");

        assert_eq!(state.select_source(&catalog, "VAE"), TimerEffect::None);
        assert_eq!(state.selected_source(), None);

        // 接続済みターゲットはソース未選択でもエラーにならない
        assert_eq!(state.select_target(&catalog, "VAE"), TimerEffect::None);
        assert_eq!(state.transient_error(), None);
    }

    #[test]
    fn test_unknown_names_are_ignored() {
        let catalog = Catalog::standard();
        let mut state = MatchState::new();

        assert_eq!(state.select_source(&catalog, "MASK"), TimerEffect::None);
        assert_eq!(state.select_target(&catalog, "MASK"), TimerEffect::None);
        assert_eq!(state, MatchState::new());
    }

    #[test]
    fn test_new_source_clears_error() {
        let catalog = Catalog::standard();
        let mut state = MatchState::new();
        state.select_source(&catalog, "CLIP");
        state.select_target(&catalog, "VAE");

        let effect = state.select_source(&catalog, "IMAGE");
        assert_eq!(effect, TimerEffect::Cancel);
        assert_eq!(state.transient_error(), None);
        assert_eq!(state.selected_source(), Some("IMAGE"));
    }

    #[test]
    fn test_stale_clear_ignored() {
        let catalog = Catalog::standard();
        let mut state = MatchState::new();
        state.select_source(&catalog, "CLIP");

        let TimerEffect::Schedule(first) = state.select_target(&catalog, "VAE") else {
            panic!("expected schedule");
        };
        let TimerEffect::Schedule(second) = state.select_target(&catalog, "MODEL") else {
            panic!("expected schedule");
        };
        assert_ne!(first, second);

        state.clear_error(first);
        assert_eq!(state.transient_error(), Some(MatchError::IncompatibleMatch));

        state.clear_error(second);
        assert_eq!(state.transient_error(), None);
        assert_eq!(state.selected_source(), Some("CLIP"));
    }

    #[test]
    fn test_reset() {
        let catalog = Catalog::standard();
        let mut state = MatchState::new();
        for name in names(&catalog) {
            state.select_source(&catalog, &name);
            state.select_target(&catalog, &name);
        }
        assert!(state.is_complete(&catalog));
        assert_eq!(state.phase(&catalog), MatchPhase::Complete);

        assert_eq!(state.reset(), TimerEffect::Cancel);
        assert!(!state.is_complete(&catalog));
        assert!(state.matched().is_empty());
        assert_eq!(state.phase(&catalog), MatchPhase::Empty);
    }

    #[test]
    fn test_reduce_dispatch() {
        let catalog = Catalog::standard();
        let mut state = MatchState::new();

        reduce(&mut state, &catalog, MatchAction::SelectSource("LATENT".into()));
        let effect = reduce(&mut state, &catalog, MatchAction::SelectTarget("IMAGE".into()));
        let TimerEffect::Schedule(ticket) = effect else {
            panic!("expected schedule");
        };

        reduce(&mut state, &catalog, MatchAction::ClearError(ticket));
        assert_eq!(state.transient_error(), None);
        assert_eq!(state.progress(&catalog), (0, 6));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MatchError::NoSourceSelected.to_string(),
            "Select a source (Left) energy type first."
        );
        assert!(MatchError::IncompatibleMatch.to_string().contains("Incompatible"));
    }
}
