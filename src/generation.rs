//! The generation pipeline: validation, guaranteed-coverage seeding, unbiased
//! fill, and a secure shuffle.
//!
//! Every random index used here (seed positions, alphabet indices, shuffle
//! partners) comes from [`uniform_index`], which rejects and redraws rather
//! than reducing a raw draw modulo the range. Reducing a raw byte modulo a
//! range that doesn't divide it evenly measurably favours low indices, which
//! weakens generated secrets.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::request::selected_alphabets;
use crate::{GenerateError, GenerationRequest, Secret, MAX_LENGTH};

/// Generate a password for `request` using the operating system's secure
/// random source.
pub fn generate(request: &GenerationRequest) -> Result<Secret, GenerateError> {
    generate_with(&mut OsRng, request)
}

/// Generate a password for `request`, drawing randomness from `rng`.
///
/// The bound requires a cryptographically secure generator; there is no
/// fallback path through a weaker source.
///
/// On success the password has exactly `request.length` characters, all drawn
/// from the union of the selected alphabets, and contains at least one
/// character from each selected category. The coverage guarantee degrades
/// only when the length is smaller than the number of selected categories:
/// then just the first `length` categories, in the fixed category order, are
/// guaranteed a character.
pub fn generate_with<R>(rng: &mut R, request: &GenerationRequest) -> Result<Secret, GenerateError>
where
    R: RngCore + CryptoRng,
{
    // Validation happens before any draw, so invalid input wastes no entropy.
    if request.length < 1 || request.length > MAX_LENGTH {
        return Err(GenerateError::InvalidLength(request.length));
    }
    let length = request.length as usize;

    let alphabets = selected_alphabets(request);
    if alphabets.is_empty() {
        return Err(GenerateError::NoCategorySelected);
    }

    let mut slots: Vec<Option<char>> = vec![None; length];

    // Coverage pass: each of the first `min(N, length)` alphabets places one
    // character into a uniformly chosen open position. Picking from the list
    // of open positions (rather than rerolling or probing on collision) keeps
    // the seeded positions uniform over the remaining slots.
    let mut open_positions: Vec<usize> = (0..length).collect();
    for alphabet in alphabets.iter().take(length) {
        let pos = open_positions.swap_remove(uniform_index(rng, open_positions.len())?);
        slots[pos] = Some(alphabet[uniform_index(rng, alphabet.len())?]);
    }

    // Fill the rest from the concatenation of all selected alphabets.
    let pool: Vec<char> = alphabets.iter().flatten().copied().collect();
    for slot in slots.iter_mut() {
        if slot.is_none() {
            *slot = Some(pool[uniform_index(rng, pool.len())?]);
        }
    }

    let mut buffer: Vec<char> = slots
        .into_iter()
        .map(|slot| slot.expect("every slot is filled before the shuffle"))
        .collect();

    // Fisher-Yates shuffle, so the seeded characters end up positionally
    // independent of the category selection order.
    for i in (1..buffer.len()).rev() {
        let j = uniform_index(rng, i + 1)?;
        buffer.swap(i, j);
    }

    Ok(Secret::from(buffer.into_iter().collect::<String>()))
}

/// Draw a uniformly distributed index in `[0, bound)` from `rng`.
///
/// Rejection sampling over a 32-bit draw: any draw at or above the largest
/// multiple of `bound` representable in 32 bits is discarded and redrawn, so
/// every index ends up with identical probability mass regardless of whether
/// `bound` divides the draw range. Rejections are rare for the small bounds
/// in play, so the loop terminates after very few iterations in practice.
fn uniform_index<R>(rng: &mut R, bound: usize) -> Result<usize, GenerateError>
where
    R: RngCore + CryptoRng,
{
    debug_assert!(bound > 0 && bound <= u32::MAX as usize);
    let bound = bound as u32;
    let zone = u32::MAX - u32::MAX % bound;
    loop {
        let mut raw = [0u8; 4];
        rng.try_fill_bytes(&mut raw)
            .map_err(GenerateError::RandomSourceUnavailable)?;
        let draw = u32::from_le_bytes(raw);
        if draw < zone {
            return Ok((draw % bound) as usize);
        }
    }
}
