use std::time::Duration;

/// Base time between two revealed characters.
pub const BASE_STEP: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingState {
    Idle,
    Typing(usize),
    Done,
}

/// Reveals `text` one character at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    text: String,
    len: usize,
    start_delay: Duration,
    step: Duration,
    state: TypingState,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self {
            text,
            len,
            start_delay: Duration::ZERO,
            step: BASE_STEP,
            state: TypingState::Idle,
        }
    }

    pub fn with_start_delay(mut self, delay: Duration) -> Self {
        self.start_delay = delay;
        self
    }

    /// Slows every step by `extra` on top of the base 100ms.
    pub fn with_extra_delay(mut self, extra: Duration) -> Self {
        self.step = BASE_STEP + extra;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn start_delay(&self) -> Duration {
        self.start_delay
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    pub fn state(&self) -> TypingState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == TypingState::Done
    }

    /// Idle → Typing(0). Any other state is left alone.
    pub fn start(&mut self) {
        if self.state == TypingState::Idle {
            self.state = self.settle(0);
        }
    }

    /// Advances one step. Returns whether the state changed.
    pub fn tick(&mut self) -> bool {
        let next = match self.state {
            TypingState::Idle | TypingState::Done => return false,
            TypingState::Typing(i) => self.settle(i + 1),
        };
        self.state = next;
        true
    }

    /// The state the schedule reaches `elapsed` after mount.
    pub fn state_at(&self, elapsed: Duration) -> TypingState {
        let Some(typing) = elapsed.checked_sub(self.start_delay) else {
            return TypingState::Idle;
        };
        let steps = if self.step.is_zero() {
            self.len
        } else {
            (typing.as_nanos() / self.step.as_nanos()).min(self.len as u128) as usize
        };
        self.settle(steps)
    }

    pub fn displayed(&self) -> &str {
        self.prefix(self.state)
    }

    pub fn displayed_at(&self, elapsed: Duration) -> &str {
        self.prefix(self.state_at(elapsed))
    }

    /// Every distinct displayed prefix, in order, ending with the full text.
    pub fn frames(&self) -> Vec<&str> {
        (0..=self.len).map(|i| self.prefix(TypingState::Typing(i))).collect()
    }

    fn settle(&self, index: usize) -> TypingState {
        if index >= self.len {
            TypingState::Done
        } else {
            TypingState::Typing(index)
        }
    }

    fn prefix(&self, state: TypingState) -> &str {
        let chars = match state {
            TypingState::Idle => 0,
            TypingState::Typing(i) => i,
            TypingState::Done => return &self.text,
        };
        match self.text.char_indices().nth(chars) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_hi_schedule() {
        let tw = Typewriter::new("Hi");
        assert_eq!(tw.displayed_at(ms(0)), "");
        assert_eq!(tw.displayed_at(ms(99)), "");
        assert_eq!(tw.displayed_at(ms(100)), "H");
        assert_eq!(tw.displayed_at(ms(200)), "Hi");
        assert_eq!(tw.displayed_at(ms(5000)), "Hi");
        assert_eq!(tw.state_at(ms(200)), TypingState::Done);
    }

    #[test]
    fn test_start_and_extra_delay() {
        let tw = Typewriter::new("abc")
            .with_start_delay(ms(500))
            .with_extra_delay(ms(50));
        assert_eq!(tw.state_at(ms(499)), TypingState::Idle);
        assert_eq!(tw.state_at(ms(500)), TypingState::Typing(0));
        assert_eq!(tw.displayed_at(ms(649)), "");
        assert_eq!(tw.displayed_at(ms(650)), "a");
        assert_eq!(tw.displayed_at(ms(800)), "ab");
        assert_eq!(tw.state_at(ms(950)), TypingState::Done);
    }

    #[test]
    fn test_tagline_delay_is_paid_once() {
        let tagline = "Crafting digital experiences with modern technologies";
        let tw = Typewriter::new(tagline).with_start_delay(ms(3000));
        assert_eq!(tw.step(), BASE_STEP);
        assert_eq!(tw.displayed_at(ms(2999)), "");
        assert_eq!(tw.displayed_at(ms(3100)), "C");
        assert_eq!(tw.displayed_at(ms(3500)), "Craft");
        // 53 characters at the base step after one 3 s wait
        assert_eq!(tagline.chars().count(), 53);
        assert_eq!(tw.state_at(ms(8299)), TypingState::Typing(52));
        assert_eq!(tw.state_at(ms(8300)), TypingState::Done);
    }

    #[test]
    fn test_ticks_match_schedule() {
        let mut tw = Typewriter::new("Full Stack");
        assert_eq!(tw.displayed(), "");
        assert!(!tw.tick());
        tw.start();
        let mut seen = vec![tw.displayed().to_string()];
        while tw.tick() {
            seen.push(tw.displayed().to_string());
        }
        assert_eq!(seen, tw.frames());
        assert_eq!(seen.last().map(String::as_str), Some("Full Stack"));
        assert!(tw.is_done());
        assert!(!tw.tick());
    }

    #[test]
    fn test_deterministic_on_repeat() {
        let a = Typewriter::new("Crafting").with_extra_delay(ms(30));
        let b = Typewriter::new("Crafting").with_extra_delay(ms(30));
        let at = |tw: &Typewriter| {
            (0..20)
                .map(|i| tw.displayed_at(ms(i * 65)).to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(at(&a), at(&b));
    }

    #[test]
    fn test_multibyte_prefixes() {
        let tw = Typewriter::new("Aug – July");
        assert_eq!(tw.displayed_at(ms(500)), "Aug –");
        assert_eq!(tw.frames().len(), 11);
    }

    #[test]
    fn test_empty_text_finishes_immediately() {
        let mut tw = Typewriter::new("");
        tw.start();
        assert!(tw.is_done());
        assert_eq!(tw.displayed(), "");
        assert_eq!(tw.state_at(ms(0)), TypingState::Done);
    }
}
