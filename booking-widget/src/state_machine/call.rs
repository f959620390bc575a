use booking_core::format::{envelope::Reply, error::CallError, frame::Request};
use serde::de::DeserializeOwned;

use crate::{interfaces::RequestId, view::FormKind, widget::core::WidgetCore};

/// What an in-flight call answers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum CallTarget {
    Availability(FormKind),
    Submission(FormKind),
}

impl WidgetCore {
    pub(crate) fn next_request_id(&mut self) -> RequestId {
        self.last_request_id += 1;
        RequestId(self.last_request_id)
    }

    /// Sends `request` under `id`. A request that could not be built is
    /// answered right away with its error.
    pub(crate) fn enqueue_call(
        &mut self,
        id: RequestId,
        target: CallTarget,
        request: Result<Request, CallError>,
    ) {
        match request {
            Ok(request) => {
                self.in_flight.insert(id, target);
                self.send_request(id, request);
            }
            Err(e) => {
                log::error!("cannot build request {}: {}", id, e);
                self.dispatch_response(target, id, Err(e));
            }
        }
    }

    pub(crate) fn gateway_response_helper(&mut self, id: RequestId, res: Result<Reply, CallError>) {
        match self.in_flight.remove(&id) {
            Some(target) => {
                match &res {
                    Ok(_) => log::info!("call {} answered", id),
                    Err(e) => log::info!("call {} failed: {}", id, e),
                }
                self.dispatch_response(target, id, res);
            }
            None => log::warn!("response for unknown call {}", id),
        }
    }

    pub(crate) fn parse_response<T: DeserializeOwned>(res: Result<Reply, CallError>) -> Result<T, CallError> {
        res.and_then(|reply| reply.data_as::<T>())
    }

    fn dispatch_response(&mut self, target: CallTarget, id: RequestId, res: Result<Reply, CallError>) {
        match target {
            CallTarget::Availability(form) => {
                self.availability_response(form, id, Self::parse_response(res))
            }
            CallTarget::Submission(form) => self.submission_response(form, id, res),
        }
    }
}
