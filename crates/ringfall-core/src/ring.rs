//! Ring state and the per-tick motion update.
//!
//! A ring is a one-dimensional vertical point mass with a visual radius.
//! Motion is a two-step pipeline: a role-specific explicit-Euler proposal
//! of the new `(y, vy)`, then the shared floor clamp. The clamp is the
//! only place the floor invariant is enforced; collision resolution never
//! re-checks it.

/// Free-fall acceleration. Negative: gravity points down.
///
/// The magnitude is the unit of acceleration for the whole system: a
/// driven ring's self-acceleration is expressed in multiples of it.
pub const GRAVITY: f64 = -1.0;

/// Default ring radius, shared by every ring in a chain.
pub const DEFAULT_RADIUS: f64 = 0.1;

/// Default integration timestep in seconds.
pub const DEFAULT_DT: f64 = 0.01;

/// Motion law for a ring, selected at construction.
///
/// Two flat variants; the role picks the constant acceleration used by
/// [`Ring::integrate`]. A renderer can also use the role to choose a
/// color (the driven ring is conventionally drawn distinguished).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RingRole {
    /// Subject to gravity only.
    Passive,
    /// The chain's driven end: gravity plus a constant self-acceleration.
    Active {
        /// Self-acceleration in units of gravity magnitude. Immutable
        /// after construction.
        drive: f64,
    },
}

impl RingRole {
    /// Net vertical acceleration under this role.
    pub fn acceleration(&self) -> f64 {
        match self {
            Self::Passive => GRAVITY,
            Self::Active { drive } => GRAVITY + drive,
        }
    }

    /// Whether this is the driven role.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }
}

/// A single chain element: vertical position, velocity, radius, and role.
///
/// `y` and `vy` are public because the engine mutates them in place every
/// tick (integration and collision resolution). `r` and `role` are fixed
/// at creation and readable through accessors.
///
/// # Floor invariant
///
/// After every [`integrate`](Ring::integrate) call, `y - r >= 0`: a ring
/// whose lower edge reaches the floor stops dead (`y = r`, `vy = 0`)
/// rather than bouncing. Collision resolution can transiently push a ring
/// below the floor within a tick; the next integrate restores the
/// invariant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    /// Vertical position of the ring center.
    pub y: f64,
    /// Vertical velocity.
    pub vy: f64,
    r: f64,
    role: RingRole,
}

impl Ring {
    /// Create a ring resting on the floor: `y = r`, `vy = 0`.
    ///
    /// Radius validity is checked once at chain construction, not here.
    pub fn new(r: f64, role: RingRole) -> Self {
        Self {
            y: r,
            vy: 0.0,
            r,
            role,
        }
    }

    /// Radius. Fixed at creation.
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Motion role. Fixed at creation.
    pub fn role(&self) -> RingRole {
        self.role
    }

    /// Advance this ring by `dt`, then apply the floor clamp.
    ///
    /// The proposal is non-symplectic explicit Euler; the position
    /// update reads the pre-update velocity:
    ///
    /// ```text
    /// y  += vy * dt + a * dt^2 / 2
    /// vy += a * dt
    /// ```
    ///
    /// where `a` is the role's constant net acceleration.
    ///
    /// Returns whether the floor clamp engaged, for telemetry. There are
    /// no error conditions.
    pub fn integrate(&mut self, dt: f64) -> bool {
        let a = self.role.acceleration();
        self.y += self.vy * dt + a * dt * dt / 2.0;
        self.vy += a * dt;
        self.clamp_floor()
    }

    /// Floor clamp: if the lower edge touches or crosses height 0, the
    /// ring stops on the floor with all velocity lost. Returns whether
    /// the clamp engaged.
    fn clamp_floor(&mut self) -> bool {
        if self.y - self.r <= 0.0 {
            self.y = self.r;
            self.vy = 0.0;
            return true;
        }
        false
    }
}
