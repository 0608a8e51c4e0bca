use alloy::sol;

/// Artifact names of the deployed contracts.
pub const SVG_NFT: &str = "SVGNFT";
pub const RANDOM_SVG_NFT: &str = "RandomSVGNFT";
pub const LINK_TOKEN: &str = "LinkToken";
pub const VRF_COORDINATOR_MOCK: &str = "VRFCoordinatorMock";

sol! {
    #[sol(rpc)]
    contract SVGNFT {
        event CreatedSVGNFT(uint256 indexed tokenId, string tokenURI);

        function create(string memory svg) public;
        function tokenCounter() public view returns (uint256);
        function tokenURI(uint256 tokenId) public view returns (string memory);
    }
}

sol! {
    #[sol(rpc)]
    contract RandomSVGNFT {
        event requestedRandomSVG(bytes32 indexed requestId, uint256 indexed tokenId);
        event CreatedUnfinishedRandomSVG(uint256 indexed tokenId, uint256 randomNumber);
        event CreatedRandomSVG(uint256 indexed tokenId, string tokenURI);

        constructor(address vrfCoordinator, address linkToken, bytes32 keyHash, uint256 fee);

        function create() public returns (bytes32 requestId);
        function finishMint(uint256 tokenId) public;
        function tokenIdToRandomNumber(uint256 tokenId) public view returns (uint256);
        function tokenURI(uint256 tokenId) public view returns (string memory);
    }
}

sol! {
    #[sol(rpc)]
    contract LinkToken {
        function balanceOf(address owner) external view returns (uint256 balance);
        function transfer(address to, uint256 value) external returns (bool success);
    }
}

sol! {
    #[sol(rpc)]
    contract VRFCoordinatorMock {
        event RandomnessRequest(address indexed sender, bytes32 indexed keyHash, uint256 indexed seed);

        constructor(address linkToken);

        function callBackWithRandomness(bytes32 requestId, uint256 randomness, address consumerContract) public;
    }
}
