use serde::Serialize;

use super::{Grammar, EPSILON};

/// One rewrite of a sentential form. Forms are rendered with a single space
/// between symbols, e.g. `S + T`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivationStep {
    pub from: String,
    pub to: String,
}

/// An ordered rewrite sequence from the start symbol to the target
/// expression. Empty when the start symbol already equals the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    pub steps: Vec<DerivationStep>,
}

/// Decides whether a branch should be abandoned before expanding it, given
/// the symbol counts of the current form and of the target.
///
/// The default rule assumes productions never shrink a form, which holds for
/// the usual expression grammars but not for erasing (ϵ) productions; with
/// those, a too-eager rule can cut off valid derivations.
pub type PruneFn = fn(form_len: usize, target_len: usize) -> bool;

/// Default pruning rule: give up once the form has more symbols than the
/// target.
pub fn symbol_count_prune(form_len: usize, target_len: usize) -> bool {
    form_len > target_len
}

/// Depth-first leftmost derivation search over a grammar.
///
/// The searcher itself is read-only; all mutable state lives in a context
/// created per call, so one searcher (and one grammar) can serve any number
/// of searches, including concurrent ones.
pub struct DerivationSearcher<'g> {
    grammar: &'g Grammar,
    prune: PruneFn,
}

/// Per-invocation search state: the tokenized target and the rewrite trace
/// built up (and unwound) while backtracking.
struct SearchContext {
    target: Vec<String>,
    steps: Vec<DerivationStep>,
}

impl<'g> DerivationSearcher<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            prune: symbol_count_prune,
        }
    }

    pub fn with_prune(grammar: &'g Grammar, prune: PruneFn) -> Self {
        Self { grammar, prune }
    }

    /// Searches for a derivation of `expression` from `start`. Alternatives
    /// are tried in declaration order and the first complete derivation wins;
    /// `None` means the search space was exhausted without a match.
    pub fn search(&self, start: &str, expression: &str) -> Option<Derivation> {
        let mut ctx = SearchContext {
            target: self.grammar.tokenize(expression),
            steps: Vec::new(),
        };
        let form = vec![start.to_string()];
        if self.expand(&mut ctx, &form) {
            Some(Derivation { steps: ctx.steps })
        } else {
            None
        }
    }

    fn expand(&self, ctx: &mut SearchContext, form: &[String]) -> bool {
        // The root form is never pruned: the caller's start symbol is always
        // worth expanding at least once.
        if !ctx.steps.is_empty() && (self.prune)(form.len(), ctx.target.len()) {
            return false;
        }
        if form == &ctx.target[..] {
            return true;
        }

        for at in 0..form.len() {
            let nt = match self.grammar.get_non_terminal(&form[at]) {
                Some(nt) => nt,
                None => continue,
            };
            for body in &nt.productions {
                let candidate = self.splice(form, at, body);
                ctx.steps.push(DerivationStep {
                    from: form.join(" "),
                    to: candidate.join(" "),
                });
                if self.expand(ctx, &candidate) {
                    return true;
                }
                ctx.steps.pop();
            }
        }

        false
    }

    /// Replaces the symbol at `at` with the body's symbols. Epsilon symbols
    /// are erased rather than spliced in.
    fn splice(&self, form: &[String], at: usize, body: &[usize]) -> Vec<String> {
        let mut next = Vec::with_capacity(form.len() + body.len());
        next.extend_from_slice(&form[..at]);
        next.extend(
            body.iter()
                .map(|&s| self.grammar.get_symbol_name(s))
                .filter(|name| *name != EPSILON)
                .map(str::to_string),
        );
        next.extend_from_slice(&form[at + 1..]);
        next
    }
}

impl Grammar {
    /// Splits an expression into grammar symbols. Whitespace separates
    /// symbols but is otherwise insignificant: at each position the longest
    /// matching symbol name is taken (`id+id` and `id + id` tokenize the
    /// same). Text matching no symbol is kept as an opaque token up to the
    /// next known symbol or whitespace.
    pub fn tokenize(&self, expression: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut rest = expression.trim_start();

        while !rest.is_empty() {
            if let Some(name) = self.longest_symbol_prefix(rest) {
                tokens.push(name.to_string());
                rest = rest[name.len()..].trim_start();
            } else {
                let end = rest
                    .char_indices()
                    .skip(1)
                    .find(|&(i, c)| {
                        c.is_whitespace() || self.longest_symbol_prefix(&rest[i..]).is_some()
                    })
                    .map(|(i, _)| i)
                    .unwrap_or(rest.len());
                tokens.push(rest[..end].to_string());
                rest = rest[end..].trim_start();
            }
        }

        tokens
    }

    fn longest_symbol_prefix<'a>(&'a self, text: &str) -> Option<&'a str> {
        self.symbol_table
            .keys()
            .filter(|name| text.starts_with(name.as_str()))
            .max_by_key(|name| name.len())
            .map(|name| name.as_str())
    }

    /// Convenience: search from the grammar's own start symbol with the
    /// default pruning rule.
    pub fn derive(&self, expression: &str) -> Option<Derivation> {
        let start = self.start_symbol_name()?;
        DerivationSearcher::new(self).search(start, expression)
    }
}
