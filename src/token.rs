/*
 * Token Board Module
 *
 * This module defines the board of draggable tokens placed over the card.
 *
 * Every frame the board first works out a FramePlan from the input snapshot
 * without touching any token, then applies it. The plan spells out, per
 * token, whether it stays idle, is dragged or is asked to be deleted, plus
 * whether a new token gets created. Rules:
 * - The first token in collection order under the pointer is the hovered one
 * - A primary press on the hovered token makes it active; it keeps the
 *   pointer (and keeps following it) until the button is released
 * - A secondary press on the hovered token deletes it, at most one per frame
 * - A primary press nobody claimed creates a token centred on the pointer
 */

use nannou::prelude::*;
use tracing::debug;

use crate::canvas::Canvas;
use crate::input::FrameInput;
use crate::params::BoardParams;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token {
    // Top-left corner of the token image
    pub position: Vec2,
}

impl Token {
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }

    // Half-open square [position, position + edge)
    pub fn contains(&self, point: Vec2, edge: f32) -> bool {
        point.x >= self.position.x
            && point.y >= self.position.y
            && point.x < self.position.x + edge
            && point.y < self.position.y + edge
    }
}

// What happens to one token during one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenOutcome {
    Idle,
    Dragged(Vec2),
    DeleteRequested,
}

// Everything the board will do this frame, computed before any mutation
#[derive(Clone, Debug, PartialEq)]
pub struct FramePlan {
    pub outcomes: Vec<TokenOutcome>,
    pub delete: Option<usize>,
    pub create: Option<Vec2>,
    // Token owning the pointer after this frame, indexed before removal
    pub active: Option<usize>,
}

impl FramePlan {
    // True when some token claimed the pointer this frame
    pub fn handled_input(&self) -> bool {
        self.outcomes.iter().any(|o| *o != TokenOutcome::Idle)
    }
}

pub struct TokenBoard {
    tokens: Vec<Token>,
    active: Option<usize>,
    params: BoardParams,
}

impl TokenBoard {
    pub fn new(params: BoardParams) -> Self {
        Self {
            tokens: Vec::new(),
            active: None,
            params,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn edge(&self) -> f32 {
        self.params.token_edge
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
        self.active = None;
    }

    // First token in collection order under the pointer
    pub fn hit_test(&self, point: Vec2) -> Option<usize> {
        let edge = self.params.token_edge;
        self.tokens.iter().position(|token| token.contains(point, edge))
    }

    // Work out this frame's transitions without changing the board
    pub fn plan(&self, input: &FrameInput) -> FramePlan {
        let pointer = &input.pointer;
        let mut outcomes = vec![TokenOutcome::Idle; self.tokens.len()];

        // A token that already owns the pointer keeps it while the button is held
        let held = self
            .active
            .filter(|&i| pointer.primary_down && i < self.tokens.len());

        // Nothing else can be hovered while a token owns the pointer
        let hovered = if held.is_none() && input.board_focused {
            self.hit_test(pointer.position)
        } else {
            None
        };

        let active = held.or_else(|| hovered.filter(|_| pointer.primary_pressed()));

        let mut delete = None;
        for (i, outcome) in outcomes.iter_mut().enumerate() {
            if active == Some(i) {
                *outcome = TokenOutcome::Dragged(pointer.delta());
                continue;
            }

            if hovered == Some(i) && pointer.secondary_pressed() {
                *outcome = TokenOutcome::DeleteRequested;
                delete = Some(i);
            }
        }

        let any_token_handled_input = outcomes.iter().any(|o| *o != TokenOutcome::Idle);

        let create = if !any_token_handled_input && pointer.primary_pressed() && input.board_focused {
            let half = self.params.token_edge * 0.5;
            Some(pointer.position - vec2(half, half))
        } else {
            None
        };

        FramePlan {
            outcomes,
            delete,
            create,
            active,
        }
    }

    pub fn apply(&mut self, plan: FramePlan) {
        for (token, outcome) in self.tokens.iter_mut().zip(&plan.outcomes) {
            if let TokenOutcome::Dragged(delta) = outcome {
                token.position += *delta;
            }
        }

        let mut active = plan.active;

        if let Some(index) = plan.delete.filter(|&i| i < self.tokens.len()) {
            let removed = self.tokens.remove(index);
            debug!(index, x = removed.position.x, y = removed.position.y, "token removed");

            active = match active {
                Some(a) if a == index => None,
                Some(a) if a > index => Some(a - 1),
                other => other,
            };
        }

        if let Some(position) = plan.create {
            debug!(x = position.x, y = position.y, "token placed");
            self.tokens.push(Token::new(position));
        }

        self.active = active;
    }

    // Run one frame of interaction
    pub fn update(&mut self, input: &FrameInput) -> FramePlan {
        let plan = self.plan(input);
        self.apply(plan.clone());
        plan
    }

    // Later tokens draw on top of earlier ones
    pub fn render<C: Canvas>(&self, canvas: &mut C, image: &C::Image) {
        let size = vec2(self.params.token_edge, self.params.token_edge);
        for token in &self.tokens {
            canvas.image(image, token.position, size);
        }
    }
}

impl Default for TokenBoard {
    fn default() -> Self {
        Self::new(BoardParams::default())
    }
}
