use shared_kernel::application::pagination::PageRequest;

#[derive(Debug, Clone, Copy, Default)]
pub struct ListVendorsQuery {
    pub page: PageRequest,
}
