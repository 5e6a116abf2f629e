/// A pending "call me on the next display refresh" request.
///
/// Handles are never reused, so a revoked request can't be mistaken for a
/// newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameRequest(u64);

impl std::fmt::Display for FrameRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "frame#{}", self.0)
    }
}

/// Next-frame scheduling primitive supplied by the display driver.
///
/// Requests are one-shot: a consumer that wants to run every frame asks again
/// from inside its tick. Tick spacing is whatever the display offers.
pub trait FrameScheduler {
    /// Ask to be invoked on the next display refresh
    fn request_frame(&mut self) -> FrameRequest;

    /// Revoke a pending request. Returns false if it already fired or was
    /// never issued by this scheduler.
    fn cancel_frame(&mut self, request: FrameRequest) -> bool;
}

/// Frame scheduler backed by a plain queue.
///
/// The host render loop calls [`FrameQueue::take_due`] once per refresh and
/// delivers each returned request. Cancelled requests are never returned.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: Vec<FrameRequest>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the requests due on this refresh
    pub fn take_due(&mut self) -> Vec<FrameRequest> {
        std::mem::take(&mut self.pending)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// True when nobody is waiting for a frame
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameRequest {
        let request = FrameRequest(self.next_id);
        self.next_id += 1;
        self.pending.push(request);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) -> bool {
        let before = self.pending.len();
        self.pending.retain(|pending| *pending != request);
        self.pending.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_are_delivered_once() {
        let mut queue = FrameQueue::new();
        let first = queue.request_frame();
        let second = queue.request_frame();
        assert_ne!(first, second);

        assert_eq!(queue.take_due(), vec![first, second]);
        assert!(queue.take_due().is_empty());
    }

    #[test]
    fn test_cancelled_request_is_never_delivered() {
        let mut queue = FrameQueue::new();
        let keep = queue.request_frame();
        let drop = queue.request_frame();

        assert!(queue.cancel_frame(drop));
        assert_eq!(queue.take_due(), vec![keep]);
    }

    #[test]
    fn test_cancel_after_delivery_reports_false() {
        let mut queue = FrameQueue::new();
        let request = queue.request_frame();
        queue.take_due();
        assert!(!queue.cancel_frame(request));
        assert!(queue.is_idle());
    }
}
